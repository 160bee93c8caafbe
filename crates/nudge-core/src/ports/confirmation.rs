//! Confirmation port
//!
//! Destructive actions go through an injected yes/no gate. The shell
//! supplies the real dialog; tests supply a canned answer.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Ask the user to confirm resetting their setup.
    async fn confirm_reset(&self) -> Result<bool>;
}
