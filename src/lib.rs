pub mod api;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod db;
pub mod events;
pub mod models;
pub mod profile;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("ClinicDesk starting v{}", config::APP_VERSION);

    if let Err(e) = std::fs::create_dir_all(config::app_data_dir()) {
        tracing::warn!("Failed to create app data directory: {e}");
    }

    let state = core_state::CoreState::new();
    // Restore who was signed in before the last shutdown
    if let Err(e) = state.hydrate_identity() {
        tracing::warn!("Failed to restore session: {e}");
    }

    tauri::Builder::default()
        .manage(Arc::new(state))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::profile::load_doctor_profile,
            commands::profile::update_doctor_profile,
            commands::session::set_session,
            commands::session::get_session,
            commands::session::clear_session,
        ])
        .run(tauri::generate_context!())
        .expect("error while running ClinicDesk");
}
