//! Wizard session use case.
//!
//! `WizardSession` pairs the pure wizard state machine with the preference
//! store and navigation ports. Field mutators are pure state updates;
//! `advance()` is the only place validation runs, and completing Step3
//! persists the form as a single logical unit.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use nudge_core::onboarding::{AppChoice, MotivationKey, NudgeFrequency, OnboardingForm};
use nudge_core::ports::{
    NavigationPort, PreferenceStorePort, COMPLETED_FLAG_VALUE, ONBOARDING_COMPLETED_KEY,
    ONBOARDING_DATA_KEY,
};
use nudge_core::wizard::{Advance, ValidationError, Wizard, WizardStep};

/// Errors produced by the wizard session.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The current step did not validate; the wizard did not move.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A storage write failed during completion. The session stays on Step3
    /// with the form intact so the user can retry.
    #[error("Failed to save your preferences. Please try again.")]
    Persistence(#[source] anyhow::Error),
    /// A completion write is still outstanding; the event was ignored.
    #[error("Setup is still being saved.")]
    Busy,
}

/// Outcome of a successful `advance()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AdvanceOutcome {
    /// Moved to the given step.
    Moved { step: u8 },
    /// The form was persisted and the shell was asked to show home.
    Completed,
}

/// Serializable snapshot of the session for the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardViewDto {
    pub step: u8,
    pub form: OnboardingForm,
}

pub struct WizardSession {
    wizard: Wizard,
    store: Arc<dyn PreferenceStorePort>,
    navigation: Arc<dyn NavigationPort>,
}

impl WizardSession {
    /// Start a fresh session: Step1, default form.
    pub fn new(store: Arc<dyn PreferenceStorePort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            wizard: Wizard::new(),
            store,
            navigation,
        }
    }

    /// Reset to a fresh session. Called every time the wizard is entered;
    /// the form is never carried over from an earlier visit.
    pub fn restart(&mut self) {
        self.wizard = Wizard::new();
    }

    pub fn view(&self) -> WizardViewDto {
        WizardViewDto {
            step: self.wizard.step().number(),
            form: self.wizard.form().clone(),
        }
    }

    // --- field mutators: pure state updates, no validation side effects ---

    pub fn select_app(&mut self, app: AppChoice) {
        self.wizard.update_form(|form| form.with_selected_app(app));
    }

    pub fn set_other_app_name(&mut self, name: String) {
        self.wizard.update_form(|form| form.with_other_app_name(name));
    }

    pub fn toggle_motivation(&mut self, key: MotivationKey) {
        self.wizard
            .update_form(|form| form.with_motivation_toggled(key));
    }

    pub fn set_motivation_details(&mut self, key: MotivationKey, details: String) {
        self.wizard
            .update_form(|form| form.with_motivation_details(key, details));
    }

    pub fn set_frequency(&mut self, frequency: NudgeFrequency) {
        self.wizard.update_form(|form| form.with_frequency(frequency));
    }

    /// Move back one step. No validation, form preserved.
    pub fn retreat(&mut self) -> WizardStep {
        self.wizard.retreat()
    }

    /// Validate the current step and move forward; from Step3, persist the
    /// completed form and signal navigation to home.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, WizardError> {
        match self.wizard.advance()? {
            Advance::Moved(step) => Ok(AdvanceOutcome::Moved {
                step: step.number(),
            }),
            Advance::Completed(form) => {
                self.complete(&form).await?;
                Ok(AdvanceOutcome::Completed)
            }
        }
    }

    /// Persist the validated form. `onboardingData` is written before the
    /// completion flag: a failure in between leaves data without a flag,
    /// which the home gate treats as not completed. The flag is never set
    /// without corresponding data.
    async fn complete(&self, form: &OnboardingForm) -> Result<(), WizardError> {
        let json = serde_json::to_string(form)
            .map_err(|err| WizardError::Persistence(err.into()))?;

        self.store
            .set(ONBOARDING_DATA_KEY, &json)
            .await
            .map_err(WizardError::Persistence)?;
        self.store
            .set(ONBOARDING_COMPLETED_KEY, COMPLETED_FLAG_VALUE)
            .await
            .map_err(WizardError::Persistence)?;

        log::info!("onboarding completed, preferences saved");

        // Navigation is a signal, not part of the persistence unit. The
        // saved state is valid even if the shell fails to switch screens.
        if let Err(err) = self.navigation.replace_with_home().await {
            log::warn!("failed to navigate home after completion: {err:#}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_core::onboarding::IntervalUnit;
    use nudge_infra::MemoryPreferenceStore;
    use std::sync::Mutex;

    struct RecordingNavigation {
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingNavigation {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl NavigationPort for RecordingNavigation {
        async fn replace_with_home(&self) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push("home");
            Ok(())
        }

        async fn replace_with_wizard(&self) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push("wizard");
            Ok(())
        }

        async fn push_wizard(&self) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push("push_wizard");
            Ok(())
        }
    }

    fn session_with(
        store: Arc<MemoryPreferenceStore>,
        navigation: Arc<RecordingNavigation>,
    ) -> WizardSession {
        WizardSession::new(store, navigation)
    }

    #[tokio::test]
    async fn completes_and_persists_data_before_flag() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let navigation = Arc::new(RecordingNavigation::new());
        let mut session = session_with(store.clone(), navigation.clone());

        session.select_app(AppChoice::Instagram);
        session.advance().await.unwrap();
        session.toggle_motivation(MotivationKey::Hobbies);
        session.set_motivation_details(MotivationKey::Hobbies, "guitar".to_string());
        session.advance().await.unwrap();
        session.set_frequency(NudgeFrequency::Interval {
            amount: 10,
            unit: IntervalUnit::Minutes,
        });

        let outcome = session.advance().await.unwrap();
        assert_eq!(outcome, AdvanceOutcome::Completed);

        assert_eq!(
            store.value(ONBOARDING_COMPLETED_KEY),
            Some("true".to_string())
        );
        let data = store.value(ONBOARDING_DATA_KEY).expect("data persisted");
        let form: OnboardingForm = serde_json::from_str(&data).unwrap();
        assert_eq!(form.selected_app, Some(AppChoice::Instagram));
        assert!(form.motivations.hobbies.selected);
        assert_eq!(form.motivations.hobbies.details, "guitar");
        assert_eq!(
            form.nudge_frequency,
            NudgeFrequency::Interval {
                amount: 10,
                unit: IntervalUnit::Minutes,
            }
        );
        assert_eq!(navigation.calls(), vec!["home"]);
    }

    #[tokio::test]
    async fn validation_failure_writes_nothing() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let navigation = Arc::new(RecordingNavigation::new());
        let mut session = session_with(store.clone(), navigation.clone());

        session.select_app(AppChoice::Other);
        let err = session.advance().await.unwrap_err();
        assert!(matches!(
            err,
            WizardError::Validation(ValidationError::NameRequired)
        ));
        assert_eq!(session.view().step, 1);
        assert!(store.is_empty());
        assert!(navigation.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_save_leaves_no_flag_and_keeps_step3() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let navigation = Arc::new(RecordingNavigation::new());
        let mut session = session_with(store.clone(), navigation.clone());

        session.select_app(AppChoice::Facebook);
        session.advance().await.unwrap();
        session.toggle_motivation(MotivationKey::LovedOnes);
        session.advance().await.unwrap();

        store.fail_sets(true);
        let err = session.advance().await.unwrap_err();
        assert!(matches!(err, WizardError::Persistence(_)));

        // Still on Step3, form intact, nothing persisted, no navigation.
        assert_eq!(session.view().step, 3);
        assert_eq!(session.view().form.selected_app, Some(AppChoice::Facebook));
        assert_eq!(store.value(ONBOARDING_COMPLETED_KEY), None);
        assert!(navigation.calls().is_empty());

        // The retry succeeds once storage recovers.
        store.fail_sets(false);
        let outcome = session.advance().await.unwrap();
        assert_eq!(outcome, AdvanceOutcome::Completed);
        assert_eq!(
            store.value(ONBOARDING_COMPLETED_KEY),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn restart_discards_the_previous_form() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let navigation = Arc::new(RecordingNavigation::new());
        let mut session = session_with(store, navigation);

        session.select_app(AppChoice::TikTok);
        session.advance().await.unwrap();
        session.restart();

        let view = session.view();
        assert_eq!(view.step, 1);
        assert_eq!(view.form, OnboardingForm::default());
    }

    #[tokio::test]
    async fn retreat_walks_back_without_validating() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let navigation = Arc::new(RecordingNavigation::new());
        let mut session = session_with(store, navigation);

        session.select_app(AppChoice::X);
        session.advance().await.unwrap();
        assert_eq!(session.retreat(), WizardStep::Step1);
        assert_eq!(session.view().form.selected_app, Some(AppChoice::X));
    }
}
