//! Social API (LINE Login) response types.

use serde::{Deserialize, Serialize};

/// Access-token introspection result.
///
/// `iat` and `exp` are not part of the wire response; the client synthesizes
/// them from the response `Date` header and `expires_in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub client_id: String,

    pub expires_in: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Issued-at timestamp (seconds since epoch), synthesized client-side.
    #[serde(default)]
    pub iat: i64,

    /// Expiry timestamp (`iat + expires_in`), synthesized client-side.
    #[serde(default)]
    pub exp: i64,
}

/// Friendship flag between the user and the channel's official account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipStatus {
    #[serde(default)]
    pub friend_flag: bool,
}
