//! Persisted session context for the signed-in practitioner.
//!
//! The web client this app accompanies keeps its bearer token in
//! localStorage under `"token"`; this store is the desktop analog.
//! Values are plain strings; the identity is stored as JSON.

use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::UserIdentity;

/// Fixed key the bearer token lives under.
pub const TOKEN_KEY: &str = "token";

/// Fixed key the signed-in identity lives under.
pub const IDENTITY_KEY: &str = "current_user";

/// Get a stored session value by key. Returns None if not set.
pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT value FROM session_store WHERE key = ?1")?;
    match stmt.query_row([key], |row| row.get::<_, String>(0)) {
        Ok(val) => Ok(Some(val)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Set a session value (upsert).
pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO session_store (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Delete a session value.
pub fn delete_value(conn: &Connection, key: &str) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM session_store WHERE key = ?1", [key])?;
    Ok(())
}

// ──────────────────────────────────────────────
// Typed accessors: token + identity
// ──────────────────────────────────────────────

/// Stored bearer token, if the user has signed in.
pub fn get_token(conn: &Connection) -> Result<Option<String>, DatabaseError> {
    get_value(conn, TOKEN_KEY)
}

pub fn set_token(conn: &Connection, token: &str) -> Result<(), DatabaseError> {
    set_value(conn, TOKEN_KEY, token)
}

/// Signed-in identity, if present and decodable.
///
/// A corrupt stored value is treated as signed-out rather than fatal.
pub fn get_identity(conn: &Connection) -> Result<Option<UserIdentity>, DatabaseError> {
    match get_value(conn, IDENTITY_KEY)? {
        Some(json) => match serde_json::from_str(&json) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored identity is not decodable, ignoring");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

pub fn set_identity(conn: &Connection, identity: &UserIdentity) -> Result<(), DatabaseError> {
    let json = serde_json::to_string(identity)?;
    set_value(conn, IDENTITY_KEY, &json)
}

/// Remove both token and identity (sign-out).
pub fn clear_session_values(conn: &Connection) -> Result<(), DatabaseError> {
    delete_value(conn, TOKEN_KEY)?;
    delete_value(conn, IDENTITY_KEY)?;
    Ok(())
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
