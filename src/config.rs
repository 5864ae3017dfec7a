use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ClinicDesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default booking API origin when `CLINICDESK_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP request timeout for booking API calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Get the application data directory
/// ~/ClinicDesk/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("ClinicDesk")
}

/// Get the path of the session database (token + cached identity).
pub fn session_db_path() -> PathBuf {
    app_data_dir().join("session.db")
}

/// Base URL of the booking backend.
///
/// Overridable via `CLINICDESK_API_URL` for staging environments.
pub fn api_base_url() -> String {
    if let Ok(url) = std::env::var("CLINICDESK_API_URL") {
        return url;
    }
    DEFAULT_API_URL.to_string()
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,clinicdesk_lib=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("ClinicDesk"));
    }

    #[test]
    fn session_db_under_app_data() {
        let db = session_db_path();
        let app = app_data_dir();
        assert!(db.starts_with(app));
        assert!(db.ends_with("session.db"));
    }

    #[test]
    fn app_name_is_clinicdesk() {
        assert_eq!(APP_NAME, "ClinicDesk");
    }

    #[test]
    fn default_filter_names_this_crate() {
        let filter = default_log_filter();
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("clinicdesk_lib=debug"));
    }
}
