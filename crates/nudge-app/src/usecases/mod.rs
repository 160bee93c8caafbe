//! Business logic use cases
//!
//! Each use case takes its collaborators as `Arc<dyn Port>` so the shell can
//! wire the real adapters and tests can substitute fakes.

pub mod check_status;
pub mod get_saved_setup;
pub mod reset_setup;
pub mod wizard_session;

pub use check_status::{CheckOnboardingStatus, LaunchDecision};
pub use get_saved_setup::GetSavedSetup;
pub use reset_setup::{ResetOutcome, ResetSetup};
pub use wizard_session::{AdvanceOutcome, WizardError, WizardSession, WizardViewDto};
