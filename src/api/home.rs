//! Home-screen commands: the launch gate, saved-setup lookup, reset, and
//! the monitoring placeholder.

use std::sync::Arc;

use tauri::State;

use crate::adapters::PreAcknowledgedConfirmation;
use crate::state::AppState;
use nudge_app::{LaunchDecision, ResetOutcome, WizardViewDto};
use nudge_core::onboarding::OnboardingForm;

/// Check the completion flag and route. Never fails: an unreadable store
/// falls open to onboarding.
#[tauri::command]
pub async fn check_onboarding_status(state: State<'_, AppState>) -> Result<LaunchDecision, String> {
    Ok(state.check_status().execute().await)
}

#[tauri::command]
pub async fn get_saved_setup(
    state: State<'_, AppState>,
) -> Result<Option<OnboardingForm>, String> {
    state
        .get_saved_setup()
        .execute()
        .await
        .map_err(|err| err.to_string())
}

/// "View/Edit Setup": push the wizard with a fresh session.
#[tauri::command]
pub async fn open_wizard_for_editing(state: State<'_, AppState>) -> Result<WizardViewDto, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.restart();
    state
        .navigation()
        .push_wizard()
        .await
        .map_err(|err| err.to_string())?;
    Ok(wizard.view())
}

/// Reset the stored setup. The webview shows the destructive-action dialog
/// and passes the user's answer along; a declined dialog is a no-op.
#[tauri::command]
pub async fn reset_setup(
    confirmed: bool,
    state: State<'_, AppState>,
) -> Result<ResetOutcome, String> {
    let confirmation = Arc::new(PreAcknowledgedConfirmation::new(confirmed));
    let outcome = state
        .reset_setup(confirmation)
        .execute()
        .await
        .map_err(|err| err.to_string())?;

    if outcome == ResetOutcome::Reset {
        // The next wizard entry must not see the old form.
        state.wizard.lock().await.restart();
    }
    Ok(outcome)
}

/// Placeholder until the monitoring engine exists.
#[tauri::command]
pub fn start_monitoring() -> Result<String, String> {
    Ok("App monitoring features will be implemented next!".to_string())
}
