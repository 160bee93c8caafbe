//! Tauri command modules.

pub mod home;
pub mod wizard;
