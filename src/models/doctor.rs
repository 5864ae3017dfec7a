use serde::{Deserialize, Serialize};

/// A practitioner's public profile as the booking backend stores it.
///
/// Wire format is camelCase JSON; the backend's document id arrives as `_id`.
/// `experience` and `feesPerConsultation` stay strings — values pass through
/// as entered and the backend owns any coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub address: String,
    pub specialization: String,
    pub experience: String,
    pub fees_per_consultation: String,
    /// Daily availability window as ["HH:mm", "HH:mm"]; empty when unset.
    #[serde(default)]
    pub timings: Vec<String>,
}

/// Payload for the profile update endpoint: every editable field plus the
/// submitting user's id and the availability window in wire form.
///
/// `userId` is dropped from the JSON when no identity is known, matching
/// the web client's behavior of sending whatever its store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub address: String,
    pub specialization: String,
    pub experience: String,
    pub fees_per_consultation: String,
    /// Always present: `[]` clears the availability window.
    pub timings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "64a1f0c2e5b3a9d8f7e6c5b4",
            "firstName": "Asha",
            "lastName": "Rao",
            "phone": "5550100",
            "email": "asha.rao@example.com",
            "website": "https://asharao.example.com",
            "address": "12 Harley Street",
            "specialization": "Cardiology",
            "experience": "12",
            "feesPerConsultation": "150",
            "timings": ["09:00", "17:00"]
        }"#
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let profile: DoctorProfile = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(profile.id.as_deref(), Some("64a1f0c2e5b3a9d8f7e6c5b4"));
        assert_eq!(profile.first_name, "Asha");
        assert_eq!(profile.fees_per_consultation, "150");
        assert_eq!(profile.timings, vec!["09:00", "17:00"]);
    }

    #[test]
    fn missing_timings_defaults_to_empty() {
        let json = r#"{
            "firstName": "Asha", "lastName": "Rao", "phone": "5550100",
            "email": "a@b.c", "address": "x", "specialization": "GP",
            "experience": "3", "feesPerConsultation": "80"
        }"#;
        let profile: DoctorProfile = serde_json::from_str(json).unwrap();
        assert!(profile.timings.is_empty());
        assert!(profile.website.is_none());
        assert!(profile.id.is_none());
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let profile: DoctorProfile = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"firstName\":\"Asha\""));
        assert!(json.contains("\"feesPerConsultation\":\"150\""));
        assert!(json.contains("\"_id\":"));
    }

    #[test]
    fn update_request_drops_absent_optionals() {
        let request = ProfileUpdateRequest {
            user_id: None,
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
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("userId"));
        assert!(!json.contains("website"));
        assert!(json.contains("\"timings\":[]"));
    }

    #[test]
    fn update_request_keeps_user_id_when_known() {
        let request = ProfileUpdateRequest {
            user_id: Some("u-7".into()),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            phone: "5550100".into(),
            email: "a@b.c".into(),
            website: Some("https://a.example.com".into()),
            address: "x".into(),
            specialization: "GP".into(),
            experience: "3".into(),
            fees_per_consultation: "80".into(),
            timings: vec!["09:00".into(), "17:00".into()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"userId\":\"u-7\""));
        assert!(json.contains("\"timings\":[\"09:00\",\"17:00\"]"));
    }
}
