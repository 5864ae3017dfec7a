use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, State};

use crate::core_state::CoreState;
use crate::events::TauriNotifier;
use crate::profile::page::{self, LoadOutcome, SaveOutcome};
use crate::profile::ProfileForm;

/// What a save attempt produced, shaped for the webview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<String>,
}

/// Fetch the doctor's profile and prefill the edit form.
///
/// Returns `None` when the route carried no doctor id or the backend
/// declined; the screen keeps its placeholder in both cases. Loading and
/// toast events are emitted along the way.
#[tauri::command]
pub async fn load_doctor_profile(
    doctor_id: Option<String>,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<ProfileForm>, String> {
    let ui = TauriNotifier::new(app);
    let outcome = page::load_profile(&state, &ui, doctor_id.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    Ok(match outcome {
        LoadOutcome::Loaded(form) => Some(form),
        LoadOutcome::MissingRouteId | LoadOutcome::Unavailable => None,
    })
}

/// Validate the edited form and push it to the backend.
#[tauri::command]
pub async fn update_doctor_profile(
    values: ProfileForm,
    app: AppHandle,
    state: State<'_, Arc<CoreState>>,
) -> Result<SaveResult, String> {
    let ui = TauriNotifier::new(app);
    let outcome = page::save_profile(&state, &ui, values)
        .await
        .map_err(|e| e.to_string())?;

    Ok(match outcome {
        SaveOutcome::Saved(message) => SaveResult {
            saved: true,
            message: Some(message),
            field_errors: Vec::new(),
        },
        SaveOutcome::Rejected(message) => SaveResult {
            saved: false,
            message: Some(message),
            field_errors: Vec::new(),
        },
        SaveOutcome::Invalid(field_errors) => SaveResult {
            saved: false,
            message: None,
            field_errors,
        },
    })
}
