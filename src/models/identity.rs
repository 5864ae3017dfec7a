use serde::{Deserialize, Serialize};

/// The signed-in user as the booking platform identifies them.
///
/// Written by the login flow through `set_session`; the profile screen only
/// reads it to stamp `userId` on update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_underscore_id() {
        let json = r#"{"_id": "u-42", "name": "Dr. Rao"}"#;
        let user: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-42");

        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"_id\":\"u-42\""));
    }
}
