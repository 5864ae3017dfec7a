use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::core_state::CoreState;
use crate::models::UserIdentity;

/// Signed-in user summary for the webview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,
}

/// Store the bearer token and user handed over after sign-in.
#[tauri::command]
pub fn set_session(
    token: String,
    user: UserIdentity,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    state.set_session(&token, user).map_err(|e| e.to_string())
}

/// Who is currently signed in, if anyone.
#[tauri::command]
pub fn get_session(state: State<'_, Arc<CoreState>>) -> Result<SessionView, String> {
    let user = state.identity().map_err(|e| e.to_string())?;
    Ok(SessionView {
        signed_in: user.is_some(),
        user,
    })
}

/// Forget the stored token and user.
#[tauri::command]
pub fn clear_session(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    state.clear_session().map_err(|e| e.to_string())
}
