//! Nudge application shell.
//!
//! Wires the Tauri runtime to the use cases in `nudge-app`: resolves the
//! app data directory, builds the file-backed preference store, and exposes
//! the wizard and home-gate commands to the webview.

mod adapters;
mod api;
mod logging;
mod state;

use std::sync::Arc;

use tauri::Manager;

use adapters::EventNavigationPort;
use nudge_infra::FilePreferenceStore;
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let app_data_dir = app
                .path()
                .app_data_dir()
                .map_err(|err| anyhow::anyhow!(err))?;
            std::fs::create_dir_all(&app_data_dir)?;

            let store = Arc::new(FilePreferenceStore::with_defaults(app_data_dir));
            let navigation = Arc::new(EventNavigationPort::new(app.handle().clone()));
            app.manage(AppState::new(store, navigation));

            log::info!("Nudge starting up");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::wizard::wizard_view,
            api::wizard::wizard_options,
            api::wizard::restart_wizard,
            api::wizard::select_app,
            api::wizard::set_other_app_name,
            api::wizard::toggle_motivation,
            api::wizard::set_motivation_details,
            api::wizard::set_nudge_frequency,
            api::wizard::advance_step,
            api::wizard::retreat_step,
            api::home::check_onboarding_status,
            api::home::get_saved_setup,
            api::home::open_wizard_for_editing,
            api::home::reset_setup,
            api::home::start_monitoring,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
