//! Logging setup.

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind};

/// Build the log plugin: stdout plus a rotating file in the app log dir.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .level(default_level)
        .target(Target::new(TargetKind::Stdout))
        .target(Target::new(TargetKind::LogDir {
            file_name: Some("nudge.log".to_string()),
        }))
}
