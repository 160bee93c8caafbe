//! Navigation port
//!
//! The core signals routing intents without dictating how the shell
//! implements them. The Tauri adapter forwards these to the webview.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait NavigationPort: Send + Sync {
    /// Replace the current screen with the home screen.
    async fn replace_with_home(&self) -> Result<()>;

    /// Replace the current screen with the onboarding wizard.
    async fn replace_with_wizard(&self) -> Result<()>;

    /// Push the wizard on top of the current screen (View/Edit Setup).
    async fn push_wizard(&self) -> Result<()>;
}
