//! Saved setup lookup.
//!
//! Backs the home screen's "View/Edit Setup" affordance: decodes the last
//! completed onboarding form from storage, if any.

use std::sync::Arc;

use anyhow::{Context, Result};

use nudge_core::onboarding::OnboardingForm;
use nudge_core::ports::{PreferenceStorePort, ONBOARDING_DATA_KEY};

pub struct GetSavedSetup {
    store: Arc<dyn PreferenceStorePort>,
}

impl GetSavedSetup {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    /// `None` when no completed setup has been stored yet.
    pub async fn execute(&self) -> Result<Option<OnboardingForm>> {
        let Some(json) = self.store.get(ONBOARDING_DATA_KEY).await? else {
            return Ok(None);
        };

        let form: OnboardingForm =
            serde_json::from_str(&json).context("Failed to parse onboarding data")?;
        Ok(Some(form))
    }
}
