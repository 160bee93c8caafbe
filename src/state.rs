//! Tauri-managed application state.

use std::sync::Arc;

use tokio::sync::Mutex;

use nudge_app::{CheckOnboardingStatus, GetSavedSetup, ResetSetup, WizardSession};
use nudge_core::ports::{ConfirmationPort, NavigationPort, PreferenceStorePort};

pub struct AppState {
    store: Arc<dyn PreferenceStorePort>,
    navigation: Arc<dyn NavigationPort>,
    /// One wizard session at a time. Commands that advance the wizard use
    /// `try_lock` so events arriving while a completion write is outstanding
    /// are ignored rather than queued.
    pub wizard: Mutex<WizardSession>,
}

impl AppState {
    pub fn new(store: Arc<dyn PreferenceStorePort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            wizard: Mutex::new(WizardSession::new(store.clone(), navigation.clone())),
            store,
            navigation,
        }
    }

    pub fn navigation(&self) -> Arc<dyn NavigationPort> {
        self.navigation.clone()
    }

    // Use cases are cheap bundles of Arc'd ports; build them per command.

    pub fn check_status(&self) -> CheckOnboardingStatus {
        CheckOnboardingStatus::new(self.store.clone(), self.navigation.clone())
    }

    pub fn get_saved_setup(&self) -> GetSavedSetup {
        GetSavedSetup::new(self.store.clone())
    }

    pub fn reset_setup(&self, confirmation: Arc<dyn ConfirmationPort>) -> ResetSetup {
        ResetSetup::new(self.store.clone(), self.navigation.clone(), confirmation)
    }
}
