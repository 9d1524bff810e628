//! OAuth 2.0 token types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel identity used both as OAuth2 client credentials and as the HMAC
/// key for webhook signature verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCredentials {
    pub channel_id: String,
    pub channel_secret: String,
}

impl ChannelCredentials {
    pub fn new(channel_id: impl Into<String>, channel_secret: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            channel_secret: channel_secret.into(),
        }
    }
}

/// Access and refresh tokens with metadata.
///
/// Replaced wholesale on refresh, never mutated in place. A token is valid
/// iff the current time is strictly before `expires_at`; a token without an
/// expiry timestamp is treated as valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// Opaque bearer token for API authentication
    pub access_token: String,

    /// Refresh token, when the grant issued one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// ID token (JWT) for LINE Login authorization-code grants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Absolute expiration timestamp (UTC), calculated from `expires_in`
    /// at token creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Granted scopes (space-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenSet {
    /// Create a new `TokenSet` with a calculated expiration timestamp.
    #[must_use]
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        id_token: Option<String>,
        expires_in: i64,
        scope: Option<String>,
    ) -> Self {
        let expires_at = if expires_in > 0 {
            Some(Utc::now() + chrono::Duration::seconds(expires_in))
        } else {
            None
        };

        Self {
            access_token,
            refresh_token,
            id_token,
            token_type: "Bearer".to_string(),
            expires_in,
            expires_at,
            scope,
        }
    }

    /// Check whether the token is expired, or will expire within the given
    /// threshold.
    ///
    /// With a threshold of zero this is the exact validity check: valid iff
    /// the current time is strictly before `expires_at`. Tokens without an
    /// expiry timestamp are never considered expired.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let threshold = chrono::Duration::seconds(threshold_seconds);
                Utc::now() + threshold >= expires_at
            }
            None => false,
        }
    }

    /// Seconds until expiry, or `None` when no expiry is set.
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }
}

/// Token response from the authorization server (RFC 6749 §5.1).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: Option<String>,
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        let mut token = Self::new(
            response.access_token,
            response.refresh_token,
            response.id_token,
            response.expires_in,
            response.scope,
        );
        token.token_type = response.token_type;
        token
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::types.
    use super::*;

    /// Validates `TokenSet::new` behavior for the token creation scenario.
    ///
    /// Assertions:
    /// - Confirms the access token and lifetime are stored.
    /// - Ensures `expires_at` is calculated.
    /// - Confirms `token_type` equals `"Bearer"`.
    #[test]
    fn test_token_set_creation() {
        let token = TokenSet::new(
            "access_token_123".to_string(),
            Some("refresh_token_456".to_string()),
            None,
            3600,
            Some("profile".to_string()),
        );

        assert_eq!(token.access_token, "access_token_123");
        assert_eq!(token.refresh_token, Some("refresh_token_456".to_string()));
        assert_eq!(token.expires_in, 3600);
        assert!(token.expires_at.is_some());
        assert_eq!(token.token_type, "Bearer");
    }

    /// Validates `TokenSet::is_expired` behavior for the validity check
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures a one-hour token is not expired at threshold zero.
    /// - Ensures the same token reports expired with a two-hour threshold.
    #[test]
    fn test_token_expiry_check() {
        let token = TokenSet::new("access".to_string(), None, None, 3600, None);

        assert!(!token.is_expired(0));
        assert!(token.is_expired(7200));
    }

    /// Validates `TokenSet::is_expired` behavior for the already-expired
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures a token whose expiry lies in the past reports expired.
    #[test]
    fn test_expired_token_reports_expired() {
        let mut token = TokenSet::new("access".to_string(), None, None, 3600, None);
        token.expires_at = Some(Utc::now() - chrono::Duration::seconds(1));

        assert!(token.is_expired(0));
    }

    /// Validates `TokenSet::is_expired` behavior for the no-expiry scenario.
    ///
    /// Assertions:
    /// - Ensures a token without `expires_at` is never considered expired.
    /// - Ensures `seconds_until_expiry` is absent.
    #[test]
    fn test_token_without_expiry_is_valid() {
        let mut token = TokenSet::new("access".to_string(), None, None, 0, None);
        token.expires_at = None;

        assert!(!token.is_expired(0));
        assert!(token.seconds_until_expiry().is_none());
    }

    /// Validates the token response conversion scenario.
    ///
    /// Assertions:
    /// - Confirms wire fields carry over into the `TokenSet`.
    /// - Ensures `expires_at` is derived from `expires_in`.
    #[test]
    fn test_token_response_conversion() {
        let response: TokenResponse = serde_json::from_str(
            r#"{ "access_token": "a123", "token_type": "Bearer", "expires_in": 2592000 }"#,
        )
        .unwrap();

        let token: TokenSet = response.into();
        assert_eq!(token.access_token, "a123");
        assert_eq!(token.expires_in, 2592000);
        assert!(token.expires_at.is_some());
        assert!(token.refresh_token.is_none());
    }
}
