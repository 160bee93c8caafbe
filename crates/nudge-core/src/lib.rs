//! # nudge-core
//!
//! Core domain models and business logic for Nudge.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the onboarding form value type, the wizard state machine,
//! and the ports implemented by the outer layers.

pub mod onboarding;
pub mod ports;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use onboarding::{
    AppChoice, IntervalUnit, Motivation, MotivationKey, Motivations, NudgeFrequency,
    OnboardingForm,
};
pub use wizard::{Advance, ValidationError, Wizard, WizardStep};
