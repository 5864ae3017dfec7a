use thiserror::Error;

/// Transport-level failures talking to the booking backend.
///
/// Logical failures (`success: false` envelopes) are not errors at this
/// layer; they come back as data and the screen surfaces their message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Booking API is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Booking API returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed API response: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
