//! Load/save orchestration for the profile screen.
//!
//! Both flows follow the web client exactly: toggle the loading overlay
//! around the request, surface server messages on logical failures, keep a
//! fixed generic message for transport failures, and navigate home only
//! after a confirmed save.

use crate::core_state::{CoreError, CoreState};
use crate::events::UiNotifier;
use crate::models::DoctorProfile;
use crate::profile::form::ProfileForm;
use crate::profile::ProfileError;

/// Route the user lands on after a successful save.
pub const HOME_ROUTE: &str = "/";

/// Fixed toast copy for failures where no server message applies.
const LOAD_FAILED_MSG: &str = "Failed to load doctor info";
const LOAD_ERROR_MSG: &str = "Error loading doctor profile";
const SAVE_ERROR_MSG: &str = "Something Went Wrong";
const SAVED_FALLBACK_MSG: &str = "Profile updated";

/// What the profile screen is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// Placeholder until a profile arrives.
    Loading,
    /// Form is on screen, pre-filled from this profile.
    Editing(DoctorProfile),
}

/// Result of a load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No doctor id in the route: nothing fetched, page stays loading.
    MissingRouteId,
    /// Profile fetched; form ready with these initial values.
    Loaded(ProfileForm),
    /// Backend declined; page stays loading, toast already shown.
    Unavailable,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Required fields unmet; nothing was sent.
    Invalid(Vec<String>),
    /// Backend refused the update with this message.
    Rejected(String),
    /// Update confirmed with this message; user sent home.
    Saved(String),
}

/// Fetch the profile named by the route and prepare the form.
///
/// A missing or blank route id is a logged no-op: the web client never
/// issued a request in that case, it just left the placeholder up.
pub async fn load_profile(
    state: &CoreState,
    ui: &dyn UiNotifier,
    route_id: Option<&str>,
) -> Result<LoadOutcome, ProfileError> {
    let Some(doctor_id) = route_id.filter(|id| !id.trim().is_empty()) else {
        tracing::warn!("Doctor id not found in route, skipping profile fetch");
        return Ok(LoadOutcome::MissingRouteId);
    };

    // Re-entry behaves like a fresh mount.
    state.reset_page()?;

    let token = state.stored_token()?.unwrap_or_default();

    ui.show_loading();
    let result = state.client().get_doctor_info(&token, doctor_id).await;
    ui.hide_loading();

    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!(error = %e, doctor_id, "Profile fetch failed");
            ui.error(LOAD_ERROR_MSG);
            return Err(e.into());
        }
    };

    match envelope.data {
        Some(profile) if envelope.success => {
            tracing::info!(doctor_id, "Profile loaded");
            let form = ProfileForm::from_profile(&profile);
            state.set_page(PageState::Editing(profile))?;
            Ok(LoadOutcome::Loaded(form))
        }
        _ => {
            tracing::warn!(doctor_id, message = ?envelope.message, "Backend declined profile fetch");
            ui.error(LOAD_FAILED_MSG);
            Ok(LoadOutcome::Unavailable)
        }
    }
}

/// Validate the submitted form and push it to the backend.
///
/// The form only exists once a load has succeeded; submitting while the
/// page is still loading is an error, not an outcome.
pub async fn save_profile(
    state: &CoreState,
    ui: &dyn UiNotifier,
    values: ProfileForm,
) -> Result<SaveOutcome, ProfileError> {
    match state.page()? {
        PageState::Editing(_) => {}
        PageState::Loading => return Err(CoreError::ProfileNotLoaded.into()),
    }

    let missing = values.validate();
    if !missing.is_empty() {
        tracing::debug!(fields = missing.len(), "Submit blocked by required fields");
        return Ok(SaveOutcome::Invalid(missing));
    }

    let user_id = state.identity()?.map(|user| user.id);
    let request = values.into_update_request(user_id);
    let token = state.stored_token()?.unwrap_or_default();

    ui.show_loading();
    let result = state.client().update_profile(&token, &request).await;
    ui.hide_loading();

    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!(error = %e, "Profile update failed");
            ui.error(SAVE_ERROR_MSG);
            return Err(e.into());
        }
    };

    if envelope.success {
        let message = envelope.message_or(SAVED_FALLBACK_MSG).to_string();
        tracing::info!("Profile updated");
        ui.success(&message);
        ui.navigate(HOME_ROUTE);
        Ok(SaveOutcome::Saved(message))
    } else {
        let message = envelope.message_or(SAVE_ERROR_MSG).to_string();
        tracing::warn!(message = %message, "Backend rejected profile update");
        ui.error(&message);
        Ok(SaveOutcome::Rejected(message))
    }
}

