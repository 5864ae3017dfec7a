//! The editable profile form and its required-field rules.

use serde::{Deserialize, Serialize};

use crate::models::{DoctorProfile, ProfileUpdateRequest};
use crate::profile::timings::{self, TimeRange};

/// Editable fields of the profile screen, as the webview submits them.
///
/// Values stay strings and pass through untouched; only presence is
/// enforced here, like the web form it mirrors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub address: String,
    pub specialization: String,
    pub experience: String,
    pub fees_per_consultation: String,
    pub timings: Option<TimeRange>,
}

impl ProfileForm {
    /// Initial form values from a fetched profile.
    pub fn from_profile(profile: &DoctorProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            website: profile.website.clone(),
            address: profile.address.clone(),
            specialization: profile.specialization.clone(),
            experience: profile.experience.clone(),
            fees_per_consultation: profile.fees_per_consultation.clone(),
            timings: timings::from_wire(&profile.timings),
        }
    }

    /// Required-field check: blank after trim blocks submission.
    ///
    /// Returns one `"<Label> is required"` message per unmet field, in
    /// form order. Website and timings are optional.
    pub fn validate(&self) -> Vec<String> {
        let required: [(&str, &str); 8] = [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Phone No", &self.phone),
            ("Email", &self.email),
            ("Address", &self.address),
            ("Specialization", &self.specialization),
            ("Experience", &self.experience),
            ("Fees Per Consultation", &self.fees_per_consultation),
        ];

        required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| format!("{label} is required"))
            .collect()
    }

    /// Wire payload for the update endpoint.
    pub fn into_update_request(self, user_id: Option<String>) -> ProfileUpdateRequest {
        ProfileUpdateRequest {
            user_id,
            timings: timings::to_wire(self.timings.as_ref()),
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            website: self.website,
            address: self.address,
            specialization: self.specialization,
            experience: self.experience,
            fees_per_consultation: self.fees_per_consultation,
        }
    }
}
