//! Launch-time onboarding gate.
//!
//! Reads the completion flag once per app launch and decides which screen
//! to show. A storage read failure is never surfaced to the user: the gate
//! fails open to onboarding and logs the error.

use std::sync::Arc;

use serde::Serialize;

use nudge_core::ports::{
    NavigationPort, PreferenceStorePort, COMPLETED_FLAG_VALUE, ONBOARDING_COMPLETED_KEY,
};

/// Where the launch check routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchDecision {
    /// Setup is complete; render the home screen.
    Home,
    /// Setup is missing or unreadable; the wizard was requested instead.
    Onboarding,
}

pub struct CheckOnboardingStatus {
    store: Arc<dyn PreferenceStorePort>,
    navigation: Arc<dyn NavigationPort>,
}

impl CheckOnboardingStatus {
    pub fn new(store: Arc<dyn PreferenceStorePort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self { store, navigation }
    }

    /// Read the completion flag and route. Absence of the flag alone is
    /// sufficient to route to onboarding, regardless of stale data under
    /// other keys. This operation never fails.
    pub async fn execute(&self) -> LaunchDecision {
        let completed = match self.store.get(ONBOARDING_COMPLETED_KEY).await {
            Ok(value) => value.as_deref() == Some(COMPLETED_FLAG_VALUE),
            Err(err) => {
                log::warn!("onboarding status check failed, falling back to onboarding: {err:#}");
                false
            }
        };

        if completed {
            return LaunchDecision::Home;
        }

        if let Err(err) = self.navigation.replace_with_wizard().await {
            log::warn!("failed to navigate to onboarding: {err:#}");
        }
        LaunchDecision::Onboarding
    }
}
