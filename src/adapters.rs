//! Tauri-side implementations of the core ports.

use anyhow::Result;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

use nudge_core::ports::{ConfirmationPort, NavigationPort};

/// Event the webview listens on for routing intents.
const NAVIGATE_EVENT: &str = "navigate";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigatePayload {
    screen: &'static str,
    mode: &'static str,
}

/// Navigation adapter that forwards routing intents to the webview as
/// `navigate` events. The webview owns the actual route stack.
pub struct EventNavigationPort {
    app: AppHandle,
}

impl EventNavigationPort {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit(&self, screen: &'static str, mode: &'static str) -> Result<()> {
        self.app
            .emit(NAVIGATE_EVENT, NavigatePayload { screen, mode })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl NavigationPort for EventNavigationPort {
    async fn replace_with_home(&self) -> Result<()> {
        self.emit("home", "replace")
    }

    async fn replace_with_wizard(&self) -> Result<()> {
        self.emit("onboarding", "replace")
    }

    async fn push_wizard(&self) -> Result<()> {
        self.emit("onboarding", "push")
    }
}

/// Confirmation adapter for actions whose yes/no dialog lives in the
/// webview: the command receives the user's answer and wraps it here, so
/// the use case still goes through the confirmation gate.
pub struct PreAcknowledgedConfirmation {
    confirmed: bool,
}

impl PreAcknowledgedConfirmation {
    pub fn new(confirmed: bool) -> Self {
        Self { confirmed }
    }
}

#[async_trait::async_trait]
impl ConfirmationPort for PreAcknowledgedConfirmation {
    async fn confirm_reset(&self) -> Result<bool> {
        Ok(self.confirmed)
    }
}
