//! User profile snapshot.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of a user profile response.
///
/// Every field defaults to the empty string when absent from the response,
/// so a partially filled profile never fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub picture_url: String,

    #[serde(default)]
    pub status_message: String,
}

#[cfg(test)]
mod tests {
    //! Unit tests for types::profile.
    use super::*;

    /// Validates `UserProfile` decoding for the full response scenario.
    ///
    /// Assertions:
    /// - Confirms each camelCase wire field lands in its snapshot field.
    #[test]
    fn test_full_profile_decodes() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "displayName": "Alice",
                "userId": "U1234",
                "pictureUrl": "https://example.com/a.jpg",
                "statusMessage": "hi"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.display_name, "Alice");
        assert_eq!(profile.user_id, "U1234");
        assert_eq!(profile.picture_url, "https://example.com/a.jpg");
        assert_eq!(profile.status_message, "hi");
    }

    /// Validates `UserProfile` decoding for the sparse response scenario.
    ///
    /// Assertions:
    /// - Ensures absent fields default to the empty string.
    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: UserProfile =
            serde_json::from_str(r#"{ "displayName": "Bob" }"#).unwrap();

        assert_eq!(profile.display_name, "Bob");
        assert_eq!(profile.user_id, "");
        assert_eq!(profile.picture_url, "");
        assert_eq!(profile.status_message, "");
    }
}
