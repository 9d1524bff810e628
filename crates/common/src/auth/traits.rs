//! Trait seam for token endpoint operations.
//!
//! Abstracting the grant/revocation calls keeps the lifecycle logic in
//! [`super::TokenHolder`] free of HTTP and lets tests substitute mock
//! grantors.

use async_trait::async_trait;

use super::types::TokenSet;
use super::AuthError;

/// Operations against the platform's OAuth2 token endpoints.
#[async_trait]
pub trait TokenGrantor: Send + Sync {
    /// Obtain a channel-scoped token via the client-credentials grant.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a
    /// malformed token response.
    async fn client_credentials_grant(&self) -> Result<TokenSet, AuthError>;

    /// Revoke the given token at the revocation endpoint.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status; the caller
    /// must treat the token as still live in that case.
    async fn revoke_token(&self, token: &str) -> Result<(), AuthError>;
}
