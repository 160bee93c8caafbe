//! # nudge-app
//!
//! Use cases for Nudge, composed from the ports in `nudge-core`. This layer
//! owns the wizard session lifecycle, the launch-time home gate, and the
//! destructive reset flow; it never touches Tauri or the filesystem directly.

pub mod usecases;

pub use usecases::{
    AdvanceOutcome, CheckOnboardingStatus, GetSavedSetup, LaunchDecision, ResetOutcome,
    ResetSetup, WizardError, WizardSession, WizardViewDto,
};
