use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::api::envelope::ApiEnvelope;
use crate::api::error::ApiError;
use crate::config;
use crate::models::{DoctorProfile, ProfileUpdateRequest};

/// Doctor endpoints, relative to the API origin.
pub const GET_DOCTOR_INFO_PATH: &str = "/api/v1/doctor/getDoctorInfo";
pub const UPDATE_PROFILE_PATH: &str = "/api/v1/doctor/updateProfile";

/// HTTP client for the booking backend.
pub struct BookingClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl BookingClient {
    /// Create a client against the given API origin.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client against the configured backend with the standard timeout.
    pub fn from_config() -> Self {
        Self::new(&config::api_base_url(), config::REQUEST_TIMEOUT_SECS)
    }

    /// Fetch a doctor's profile by their user id.
    pub async fn get_doctor_info(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<ApiEnvelope<DoctorProfile>, ApiError> {
        self.post_json(GET_DOCTOR_INFO_PATH, token, &json!({ "userId": user_id }))
            .await
    }

    /// Push edited profile fields to the backend.
    pub async fn update_profile(
        &self,
        token: &str,
        request: &ProfileUpdateRequest,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        self.post_json(UPDATE_PROFILE_PATH, token, request).await
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ApiError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ApiError::Timeout(self.timeout_secs)
                } else {
                    ApiError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }
}
