//! Preference store port
//!
//! This port defines the contract for the local key-value store the app
//! persists its onboarding state to. Implementations are provided by the
//! infrastructure layer (file-backed storage, in-memory fake for tests).
//! Each operation is asynchronous and independently fallible.

use anyhow::Result;
use async_trait::async_trait;

/// Key holding the completion flag. Value is `"true"` or the key is absent.
pub const ONBOARDING_COMPLETED_KEY: &str = "onboardingCompleted";

/// Key holding the JSON snapshot of the last completed onboarding form.
pub const ONBOARDING_DATA_KEY: &str = "onboardingData";

/// The only value ever written under [`ONBOARDING_COMPLETED_KEY`].
pub const COMPLETED_FLAG_VALUE: &str = "true";

#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Read a value, `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite a value. Last write wins.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
