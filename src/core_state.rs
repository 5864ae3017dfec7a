//! Shared application state behind the IPC surface.
//!
//! `CoreState` is wrapped in `Arc` at startup and managed by Tauri. It
//! holds the booking client, the cached signed-in identity, and the state
//! of the profile screen. Uses `RwLock` for concurrent reads from command
//! handlers.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::api::BookingClient;
use crate::config;
use crate::db::{self, DatabaseError};
use crate::models::UserIdentity;
use crate::profile::page::PageState;

/// Transport-agnostic application state.
pub struct CoreState {
    /// Signed-in identity, cached from the session store. `None` when
    /// signed out.
    identity: RwLock<Option<UserIdentity>>,
    /// What the profile screen currently shows.
    page: RwLock<PageState>,
    /// Path of the session database.
    pub session_db: PathBuf,
    /// Booking backend client.
    client: BookingClient,
}

impl CoreState {
    /// State against the configured backend and the standard session db.
    pub fn new() -> Self {
        Self::with_client(BookingClient::from_config(), config::session_db_path())
    }

    /// State with an explicit backend and session db. Tests point these at
    /// a stub server and a temp directory.
    pub fn with_client(client: BookingClient, session_db: PathBuf) -> Self {
        Self {
            identity: RwLock::new(None),
            page: RwLock::new(PageState::Loading),
            session_db,
            client,
        }
    }

    pub fn client(&self) -> &BookingClient {
        &self.client
    }

    // ── Session store ───────────────────────────────────────

    /// Open the session database (creating it on first use).
    pub fn open_session_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.session_db).map_err(CoreError::Database)
    }

    /// Bearer token from the session store. `None` when signed out.
    pub fn stored_token(&self) -> Result<Option<String>, CoreError> {
        let conn = self.open_session_db()?;
        db::session_store::get_token(&conn).map_err(CoreError::Database)
    }

    /// Load the persisted identity into the in-memory cache.
    ///
    /// Called once at startup so a restart keeps the user signed in.
    pub fn hydrate_identity(&self) -> Result<(), CoreError> {
        let conn = self.open_session_db()?;
        let stored = db::session_store::get_identity(&conn)?;
        let mut guard = self.identity.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = stored;
        Ok(())
    }

    /// Cached signed-in identity (owned copy).
    pub fn identity(&self) -> Result<Option<UserIdentity>, CoreError> {
        self.identity
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CoreError::LockPoisoned)
    }

    /// Persist and cache a fresh sign-in.
    pub fn set_session(&self, token: &str, user: UserIdentity) -> Result<(), CoreError> {
        let conn = self.open_session_db()?;
        db::session_store::set_token(&conn, token)?;
        db::session_store::set_identity(&conn, &user)?;

        let mut guard = self.identity.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(user);
        Ok(())
    }

    /// Sign out: drop the persisted and cached session context.
    pub fn clear_session(&self) -> Result<(), CoreError> {
        let conn = self.open_session_db()?;
        db::session_store::clear_session_values(&conn)?;

        let mut guard = self.identity.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = None;
        tracing::info!("Session cleared");
        Ok(())
    }

    // ── Profile page state ──────────────────────────────────

    /// Current page state (owned copy).
    pub fn page(&self) -> Result<PageState, CoreError> {
        self.page
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CoreError::LockPoisoned)
    }

    pub fn set_page(&self, next: PageState) -> Result<(), CoreError> {
        let mut guard = self.page.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = next;
        Ok(())
    }

    /// Back to the mount placeholder, as on a fresh screen entry.
    pub fn reset_page(&self) -> Result<(), CoreError> {
        self.set_page(PageState::Loading)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Profile is still loading")]
    ProfileNotLoaded,
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoctorProfile;

    fn test_state() -> (tempfile::TempDir, CoreState) {
        let dir = tempfile::tempdir().unwrap();
        let state = CoreState::with_client(
            BookingClient::new("http://localhost:9", 1),
            dir.path().join("session.db"),
        );
        (dir, state)
    }

    fn sample_profile() -> DoctorProfile {
        DoctorProfile {
            id: Some("doc-1".into()),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            phone: "5550100".into(),
            email: "a@b.c".into(),
            website: None,
            address: "x".into(),
            specialization: "GP".into(),
            experience: "3".into(),
            fees_per_consultation: "80".into(),
            timings: vec![],
        }
    }

    #[test]
    fn new_state_is_signed_out_and_loading() {
        let (_dir, state) = test_state();
        assert!(state.identity().unwrap().is_none());
        assert_eq!(state.page().unwrap(), PageState::Loading);
    }

    #[test]
    fn set_session_caches_and_persists() {
        let (_dir, state) = test_state();
        let user = UserIdentity {
            id: "u-7".into(),
            name: "Dr. Rao".into(),
        };
        state.set_session("tok-1", user.clone()).unwrap();

        assert_eq!(state.identity().unwrap(), Some(user));
        assert_eq!(state.stored_token().unwrap().as_deref(), Some("tok-1"));
    }

    #[test]
    fn hydrate_identity_restores_after_restart() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("session.db");

        let state =
            CoreState::with_client(BookingClient::new("http://localhost:9", 1), db_path.clone());
        state
            .set_session(
                "tok-1",
                UserIdentity {
                    id: "u-7".into(),
                    name: "Dr. Rao".into(),
                },
            )
            .unwrap();
        drop(state);

        // Fresh state over the same db, as after an app restart
        let restarted =
            CoreState::with_client(BookingClient::new("http://localhost:9", 1), db_path);
        assert!(restarted.identity().unwrap().is_none());
        restarted.hydrate_identity().unwrap();
        assert_eq!(
            restarted.identity().unwrap().map(|u| u.id),
            Some("u-7".to_string())
        );
    }

    #[test]
    fn clear_session_wipes_cache_and_store() {
        let (_dir, state) = test_state();
        state
            .set_session(
                "tok-1",
                UserIdentity {
                    id: "u-7".into(),
                    name: "Dr. Rao".into(),
                },
            )
            .unwrap();

        state.clear_session().unwrap();
        assert!(state.identity().unwrap().is_none());
        assert!(state.stored_token().unwrap().is_none());
    }

    #[test]
    fn page_transitions_round_trip() {
        let (_dir, state) = test_state();
        state.set_page(PageState::Editing(sample_profile())).unwrap();
        assert!(matches!(state.page().unwrap(), PageState::Editing(_)));

        state.reset_page().unwrap();
        assert_eq!(state.page().unwrap(), PageState::Loading);
    }

    #[test]
    fn stored_token_none_before_sign_in() {
        let (_dir, state) = test_state();
        assert!(state.stored_token().unwrap().is_none());
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(CoreState::with_client(
            BookingClient::new("http://localhost:9", 1),
            dir.path().join("session.db"),
        ));
        let mut handles = vec![];

        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                assert!(state.identity().unwrap().is_none());
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn core_error_display() {
        assert_eq!(
            CoreError::ProfileNotLoaded.to_string(),
            "Profile is still loading"
        );
        assert_eq!(CoreError::LockPoisoned.to_string(), "Internal lock error");
    }
}
