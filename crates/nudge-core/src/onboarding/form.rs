//! Onboarding form value type.
//!
//! The form is an immutable-with-replacement value: every mutator consumes
//! the form and returns the updated one. Validation does not happen here;
//! the wizard validates a step only when the user tries to advance past it.
//!
//! The serde shape of this type is the persisted `onboardingData` format,
//! so field names stay camelCase.

use serde::{Deserialize, Serialize};

/// App the user wants to reduce time on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppChoice {
    Facebook,
    Instagram,
    X,
    TikTok,
    Other,
}

/// Keys of the fixed, exhaustive motivation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MotivationKey {
    LovedOnes,
    Hobbies,
    PhysicalActivity,
    Other,
}

impl MotivationKey {
    pub const ALL: [MotivationKey; 4] = [
        MotivationKey::LovedOnes,
        MotivationKey::Hobbies,
        MotivationKey::PhysicalActivity,
        MotivationKey::Other,
    ];
}

/// One motivation entry: whether it is selected, plus optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motivation {
    pub selected: bool,
    #[serde(default)]
    pub details: String,
}

/// The fixed motivation set. Order is irrelevant; the keys are exhaustive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motivations {
    pub loved_ones: Motivation,
    pub hobbies: Motivation,
    pub physical_activity: Motivation,
    pub other: Motivation,
}

impl Motivations {
    pub fn get(&self, key: MotivationKey) -> &Motivation {
        match key {
            MotivationKey::LovedOnes => &self.loved_ones,
            MotivationKey::Hobbies => &self.hobbies,
            MotivationKey::PhysicalActivity => &self.physical_activity,
            MotivationKey::Other => &self.other,
        }
    }

    fn get_mut(&mut self, key: MotivationKey) -> &mut Motivation {
        match key {
            MotivationKey::LovedOnes => &mut self.loved_ones,
            MotivationKey::Hobbies => &mut self.hobbies,
            MotivationKey::PhysicalActivity => &mut self.physical_activity,
            MotivationKey::Other => &mut self.other,
        }
    }

    /// True if at least one motivation is selected.
    pub fn any_selected(&self) -> bool {
        MotivationKey::ALL.iter().any(|key| self.get(*key).selected)
    }
}

/// Unit of a fixed nudge interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Minutes,
    Seconds,
}

/// The user's chosen reminder cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NudgeFrequency {
    /// Nudge at a fixed interval.
    Interval { amount: u32, unit: IntervalUnit },
    /// Nudge on a randomized schedule.
    Surprise,
}

impl Default for NudgeFrequency {
    fn default() -> Self {
        NudgeFrequency::Interval {
            amount: 5,
            unit: IntervalUnit::Minutes,
        }
    }
}

/// The onboarding form. One instance lives per wizard session, created
/// fresh (all fields unset/default) each time the wizard is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    /// Selected app, or `None` while unset.
    pub selected_app: Option<AppChoice>,
    /// Free-text app name, meaningful only when `selected_app` is `Other`.
    #[serde(default)]
    pub other_app_name: String,
    #[serde(default)]
    pub motivations: Motivations,
    #[serde(default)]
    pub nudge_frequency: NudgeFrequency,
}

impl OnboardingForm {
    pub fn with_selected_app(mut self, app: AppChoice) -> Self {
        self.selected_app = Some(app);
        self
    }

    pub fn with_other_app_name(mut self, name: impl Into<String>) -> Self {
        self.other_app_name = name.into();
        self
    }

    /// Flip a motivation's selected bit. Its details text is preserved.
    pub fn with_motivation_toggled(mut self, key: MotivationKey) -> Self {
        let motivation = self.motivations.get_mut(key);
        motivation.selected = !motivation.selected;
        self
    }

    pub fn with_motivation_details(mut self, key: MotivationKey, details: impl Into<String>) -> Self {
        self.motivations.get_mut(key).details = details.into();
        self
    }

    pub fn with_frequency(mut self, frequency: NudgeFrequency) -> Self {
        self.nudge_frequency = frequency;
        self
    }

    /// True when the other-app name is blank. Whitespace-only counts as blank.
    pub fn other_app_name_blank(&self) -> bool {
        self.other_app_name.trim().is_empty()
    }
}
