//! Booking backend HTTP client.
//!
//! ClinicDesk talks to the same REST API as the platform's web client:
//! JSON envelopes of shape `{success, data?, message?}` behind bearer auth.
//! This module owns the reqwest client, the envelope type, and the
//! transport error taxonomy.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::BookingClient;
pub use envelope::ApiEnvelope;
pub use error::ApiError;
