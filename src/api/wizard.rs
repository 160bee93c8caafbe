//! Onboarding-wizard commands.
//!
//! Field mutators are pure state updates and return the refreshed view;
//! validation only runs in `advance_step`. Errors cross the boundary as
//! their user-facing message strings.

use serde::Serialize;
use tauri::State;
use tokio::sync::Mutex;

use crate::state::AppState;
use nudge_app::{AdvanceOutcome, WizardError, WizardSession, WizardViewDto};
use nudge_core::onboarding::{
    AppCatalogEntry, AppChoice, MotivationKey, MotivationOption, NudgeFrequency, APP_CATALOG,
    MOTIVATION_OPTIONS,
};

/// Static option lists for the wizard's screens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardOptions {
    apps: Vec<AppCatalogEntry>,
    motivations: Vec<MotivationOption>,
}

#[tauri::command]
pub async fn wizard_view(state: State<'_, AppState>) -> Result<WizardViewDto, String> {
    Ok(state.wizard.lock().await.view())
}

#[tauri::command]
pub fn wizard_options() -> WizardOptions {
    WizardOptions {
        apps: APP_CATALOG.to_vec(),
        motivations: MOTIVATION_OPTIONS.to_vec(),
    }
}

/// Start a fresh session. Called on every entry into the wizard screen.
#[tauri::command]
pub async fn restart_wizard(state: State<'_, AppState>) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.restart();
    Ok(wizard.view())
}

#[tauri::command]
pub async fn select_app(
    app: AppChoice,
    state: State<'_, AppState>,
) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.select_app(app);
    Ok(wizard.view())
}

#[tauri::command]
pub async fn set_other_app_name(
    name: String,
    state: State<'_, AppState>,
) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.set_other_app_name(name);
    Ok(wizard.view())
}

#[tauri::command]
pub async fn toggle_motivation(
    key: MotivationKey,
    state: State<'_, AppState>,
) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.toggle_motivation(key);
    Ok(wizard.view())
}

#[tauri::command]
pub async fn set_motivation_details(
    key: MotivationKey,
    details: String,
    state: State<'_, AppState>,
) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.set_motivation_details(key, details);
    Ok(wizard.view())
}

#[tauri::command]
pub async fn set_nudge_frequency(
    frequency: NudgeFrequency,
    state: State<'_, AppState>,
) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.set_frequency(frequency);
    Ok(wizard.view())
}

/// Validate the current step and move on; completing Step3 persists the
/// form. While a completion write is outstanding the session stays locked,
/// so a repeated press is rejected as busy instead of re-entering.
#[tauri::command]
pub async fn advance_step(state: State<'_, AppState>) -> Result<AdvanceOutcome, String> {
    guarded_advance(&state.wizard)
        .await
        .map_err(|err| err.to_string())
}

async fn guarded_advance(wizard: &Mutex<WizardSession>) -> Result<AdvanceOutcome, WizardError> {
    let mut session = wizard.try_lock().map_err(|_| WizardError::Busy)?;
    session.advance().await
}

#[tauri::command]
pub async fn retreat_step(state: State<'_, AppState>) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.retreat();
    Ok(wizard.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use nudge_core::ports::{NavigationPort, PreferenceStorePort};
    use nudge_infra::MemoryPreferenceStore;

    struct NoopNavigation;

    #[async_trait::async_trait]
    impl NavigationPort for NoopNavigation {
        async fn replace_with_home(&self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn replace_with_wizard(&self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn push_wizard(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn session() -> Mutex<WizardSession> {
        let store: Arc<dyn PreferenceStorePort> = Arc::new(MemoryPreferenceStore::new());
        Mutex::new(WizardSession::new(store, Arc::new(NoopNavigation)))
    }

    #[tokio::test]
    async fn advance_is_rejected_while_the_session_is_held() {
        let wizard = session();
        let _in_flight = wizard.lock().await;

        let err = guarded_advance(&wizard).await.unwrap_err();
        assert!(matches!(err, WizardError::Busy));
    }

    #[tokio::test]
    async fn advance_runs_again_once_the_session_is_released() {
        let wizard = session();
        {
            let _in_flight = wizard.lock().await;
            assert!(matches!(
                guarded_advance(&wizard).await,
                Err(WizardError::Busy)
            ));
        }

        // Lock released: the call reaches validation instead of bouncing.
        let err = guarded_advance(&wizard).await.unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
    }
}
