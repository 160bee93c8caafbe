//! Wizard state machine.
//!
//! A pure state machine for the three-step onboarding wizard: no I/O, no
//! side effects. Advancing validates the current step; completing hands the
//! validated form back to the caller, which owns persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::onboarding::OnboardingForm;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Step1,
    Step2,
    Step3,
}

impl WizardStep {
    /// 1-based step number, for "Step N of 3" displays.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Step1 => 1,
            WizardStep::Step2 => 2,
            WizardStep::Step3 => 3,
        }
    }

    fn previous(self) -> WizardStep {
        match self {
            WizardStep::Step1 | WizardStep::Step2 => WizardStep::Step1,
            WizardStep::Step3 => WizardStep::Step2,
        }
    }
}

/// Step validation failures, surfaced to the user as blocking messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please select an app to monitor.")]
    SelectionRequired,
    #[error("Please specify which app you want to monitor.")]
    NameRequired,
    #[error("Please select at least one reason for reducing app usage.")]
    MotivationRequired,
    #[error("Please enter a valid time interval.")]
    InvalidInterval,
}

/// Outcome of a successful `advance()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    Moved(WizardStep),
    /// Step3 validated; the caller must persist this form and navigate home.
    Completed(OnboardingForm),
}

/// Validate a single step against the form.
pub fn validate_step(step: WizardStep, form: &OnboardingForm) -> Result<(), ValidationError> {
    match step {
        WizardStep::Step1 => {
            let Some(app) = form.selected_app else {
                return Err(ValidationError::SelectionRequired);
            };
            if app == crate::onboarding::AppChoice::Other && form.other_app_name_blank() {
                return Err(ValidationError::NameRequired);
            }
            Ok(())
        }
        WizardStep::Step2 => {
            if !form.motivations.any_selected() {
                return Err(ValidationError::MotivationRequired);
            }
            Ok(())
        }
        WizardStep::Step3 => match form.nudge_frequency {
            crate::onboarding::NudgeFrequency::Interval { amount, .. } if amount == 0 => {
                Err(ValidationError::InvalidInterval)
            }
            _ => Ok(()),
        },
    }
}

/// Validate the completion invariant: every step's rules hold at once.
pub fn validate_complete(form: &OnboardingForm) -> Result<(), ValidationError> {
    validate_step(WizardStep::Step1, form)?;
    validate_step(WizardStep::Step2, form)?;
    validate_step(WizardStep::Step3, form)
}

/// One wizard session: the current step plus the form being filled in.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: OnboardingForm,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Step1
    }
}

impl Wizard {
    /// Fresh session: Step1 with a default form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Apply a replacement-style form mutator. A pure state update; the
    /// current step never changes and nothing is validated here.
    pub fn update_form(&mut self, mutate: impl FnOnce(OnboardingForm) -> OnboardingForm) {
        self.form = mutate(self.form.clone());
    }

    /// Validate the current step and move forward. From Step3 this yields
    /// `Advance::Completed` instead of a state change. On validation failure
    /// the step is unchanged.
    pub fn advance(&mut self) -> Result<Advance, ValidationError> {
        validate_step(self.step, &self.form)?;
        match self.step {
            WizardStep::Step1 => {
                self.step = WizardStep::Step2;
                Ok(Advance::Moved(self.step))
            }
            WizardStep::Step2 => {
                self.step = WizardStep::Step3;
                Ok(Advance::Moved(self.step))
            }
            WizardStep::Step3 => Ok(Advance::Completed(self.form.clone())),
        }
    }

    /// Move back one step without validation. Form state is preserved;
    /// retreating from Step1 stays on Step1.
    pub fn retreat(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{AppChoice, IntervalUnit, MotivationKey, NudgeFrequency};

    fn filled_wizard_on_step3() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.update_form(|form| form.with_selected_app(AppChoice::Instagram));
        wizard.advance().unwrap();
        wizard.update_form(|form| form.with_motivation_toggled(MotivationKey::Hobbies));
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn starts_on_step1_with_default_form() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::Step1);
        assert_eq!(wizard.form(), &OnboardingForm::default());
    }

    #[test]
    fn advance_without_selection_fails_and_stays_on_step1() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.advance(), Err(ValidationError::SelectionRequired));
        assert_eq!(wizard.step(), WizardStep::Step1);
    }

    #[test]
    fn advance_with_other_and_blank_name_requires_a_name() {
        let mut wizard = Wizard::new();
        wizard.update_form(|form| form.with_selected_app(AppChoice::Other));
        assert_eq!(wizard.advance(), Err(ValidationError::NameRequired));
        assert_eq!(wizard.step(), WizardStep::Step1);

        wizard.update_form(|form| form.with_other_app_name("   "));
        assert_eq!(wizard.advance(), Err(ValidationError::NameRequired));

        wizard.update_form(|form| form.with_other_app_name("Snapchat"));
        assert_eq!(wizard.advance(), Ok(Advance::Moved(WizardStep::Step2)));
    }

    #[test]
    fn advance_from_step2_requires_a_motivation() {
        let mut wizard = Wizard::new();
        wizard.update_form(|form| form.with_selected_app(AppChoice::Facebook));
        wizard.advance().unwrap();

        assert_eq!(wizard.advance(), Err(ValidationError::MotivationRequired));
        assert_eq!(wizard.step(), WizardStep::Step2);

        // Details alone do not count as a selection.
        wizard.update_form(|form| form.with_motivation_details(MotivationKey::Other, "family"));
        assert_eq!(wizard.advance(), Err(ValidationError::MotivationRequired));

        wizard.update_form(|form| form.with_motivation_toggled(MotivationKey::Other));
        assert_eq!(wizard.advance(), Ok(Advance::Moved(WizardStep::Step3)));
    }

    #[test]
    fn advance_from_step3_rejects_zero_interval() {
        let mut wizard = filled_wizard_on_step3();
        wizard.update_form(|form| {
            form.with_frequency(NudgeFrequency::Interval {
                amount: 0,
                unit: IntervalUnit::Seconds,
            })
        });
        assert_eq!(wizard.advance(), Err(ValidationError::InvalidInterval));
        assert_eq!(wizard.step(), WizardStep::Step3);
    }

    #[test]
    fn surprise_frequency_always_passes_step3() {
        let mut wizard = filled_wizard_on_step3();
        wizard.update_form(|form| form.with_frequency(NudgeFrequency::Surprise));
        match wizard.advance() {
            Ok(Advance::Completed(form)) => {
                assert_eq!(form.nudge_frequency, NudgeFrequency::Surprise)
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn completing_yields_the_validated_form_and_keeps_step3() {
        let mut wizard = filled_wizard_on_step3();
        wizard.update_form(|form| {
            form.with_frequency(NudgeFrequency::Interval {
                amount: 10,
                unit: IntervalUnit::Minutes,
            })
        });

        let Ok(Advance::Completed(form)) = wizard.advance() else {
            panic!("expected completion");
        };
        assert!(validate_complete(&form).is_ok());
        assert_eq!(form.selected_app, Some(AppChoice::Instagram));
        // The session stays on Step3 so a failed save can be retried.
        assert_eq!(wizard.step(), WizardStep::Step3);
    }

    #[test]
    fn retreat_preserves_form_state_and_never_validates() {
        let mut wizard = filled_wizard_on_step3();
        assert_eq!(wizard.retreat(), WizardStep::Step2);
        assert_eq!(wizard.retreat(), WizardStep::Step1);
        // Step1 is the floor.
        assert_eq!(wizard.retreat(), WizardStep::Step1);
        assert_eq!(wizard.form().selected_app, Some(AppChoice::Instagram));
        assert!(wizard.form().motivations.hobbies.selected);
    }

    #[test]
    fn validate_complete_checks_all_steps() {
        let form = OnboardingForm::default()
            .with_selected_app(AppChoice::Other)
            .with_other_app_name("Snapchat")
            .with_motivation_toggled(MotivationKey::LovedOnes);
        assert!(validate_complete(&form).is_ok());

        let form = form.with_other_app_name("  ");
        assert_eq!(validate_complete(&form), Err(ValidationError::NameRequired));
    }
}
