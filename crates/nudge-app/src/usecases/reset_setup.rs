//! Reset setup use case.
//!
//! A user-confirmed destructive action: clears both persisted keys and sends
//! the user back to the wizard. The completion flag is removed first, so
//! even a partial failure leaves the next launch routing to onboarding.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use nudge_core::ports::{
    ConfirmationPort, NavigationPort, PreferenceStorePort, ONBOARDING_COMPLETED_KEY,
    ONBOARDING_DATA_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetOutcome {
    /// The user declined the confirmation; nothing was touched.
    Declined,
    /// Stored setup was cleared and the wizard was requested.
    Reset,
}

pub struct ResetSetup {
    store: Arc<dyn PreferenceStorePort>,
    navigation: Arc<dyn NavigationPort>,
    confirmation: Arc<dyn ConfirmationPort>,
}

impl ResetSetup {
    pub fn new(
        store: Arc<dyn PreferenceStorePort>,
        navigation: Arc<dyn NavigationPort>,
        confirmation: Arc<dyn ConfirmationPort>,
    ) -> Self {
        Self {
            store,
            navigation,
            confirmation,
        }
    }

    pub async fn execute(&self) -> Result<ResetOutcome> {
        if !self.confirmation.confirm_reset().await? {
            return Ok(ResetOutcome::Declined);
        }

        // Flag before data: if the second removal fails, the missing flag is
        // already enough for the home gate to route to onboarding.
        self.store.remove(ONBOARDING_COMPLETED_KEY).await?;
        self.store.remove(ONBOARDING_DATA_KEY).await?;

        log::info!("setup reset, stored preferences cleared");

        if let Err(err) = self.navigation.replace_with_wizard().await {
            log::warn!("failed to navigate to onboarding after reset: {err:#}");
        }
        Ok(ResetOutcome::Reset)
    }
}
