//! Doctor profile screen: load, edit, save.
//!
//! The flow mirrors the booking platform's web client. On entry the screen
//! fetches the profile named by the route and fills the form; on submit it
//! validates required fields, converts the availability window to wire
//! form, and posts the edit. UI feedback (loading overlay, toasts,
//! navigation) goes through the [`crate::events::UiNotifier`] seam.

pub mod form;
pub mod page;
pub mod timings;


pub use form::ProfileForm;
pub use page::{load_profile, save_profile, LoadOutcome, PageState, SaveOutcome};
pub use timings::TimeRange;

use thiserror::Error;

use crate::api::ApiError;
use crate::core_state::CoreError;

/// Failures of a profile flow that are not part of its normal outcomes.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Booking API error: {0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Core(#[from] CoreError),
}
