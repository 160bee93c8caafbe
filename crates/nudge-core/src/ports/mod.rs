//! Ports implemented by the outer layers.
//!
//! Use cases depend on these traits, never on concrete adapters, so an
//! in-memory fake can stand in for the real preference store in tests.

pub mod confirmation;
pub mod navigation;
pub mod preferences;

pub use confirmation::ConfirmationPort;
pub use navigation::NavigationPort;
pub use preferences::{
    PreferenceStorePort, COMPLETED_FLAG_VALUE, ONBOARDING_COMPLETED_KEY, ONBOARDING_DATA_KEY,
};
