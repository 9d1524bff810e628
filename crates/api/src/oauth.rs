//! OAuth2 token endpoint client.
//!
//! Concrete [`TokenGrantor`] over HTTP. Credentials travel in the form body
//! (`client_secret_post`); the two API families expose the same grant shapes
//! at different paths, captured by [`TokenEndpoints`].

use async_trait::async_trait;
use line_sdk_common::{AuthError, ChannelCredentials, TokenGrantor, TokenResponse, TokenSet};
use line_sdk_domain::LineError;
use reqwest::Method;
use tracing::{debug, info};

use crate::http::HttpClient;

/// Token and revocation endpoint URLs for one API family.
#[derive(Debug, Clone)]
pub struct TokenEndpoints {
    pub token_url: String,
    pub revocation_url: String,
}

impl TokenEndpoints {
    /// Messaging API token endpoints under the given API root.
    pub fn messaging(base: &str) -> Self {
        Self {
            token_url: format!("{base}oauth/accessToken"),
            revocation_url: format!("{base}oauth/revoke"),
        }
    }

    /// LINE Login (v2.1) token endpoints under the given API root.
    pub fn social(base: &str) -> Self {
        Self {
            token_url: format!("{base}oauth2/v2.1/token"),
            revocation_url: format!("{base}oauth2/v2.1/revoke"),
        }
    }
}

/// Client for one channel's token endpoints.
pub struct ChannelTokenClient {
    credentials: ChannelCredentials,
    endpoints: TokenEndpoints,
    http: HttpClient,
}

impl ChannelTokenClient {
    pub fn new(credentials: ChannelCredentials, endpoints: TokenEndpoints, http: HttpClient) -> Self {
        Self {
            credentials,
            endpoints,
            http,
        }
    }

    /// Exchange an authorization code for a user-scoped token set
    /// (LINE Login flow). The result is typically handed to
    /// `SocialClient::set_access_token`.
    ///
    /// # Errors
    /// Transport, non-2xx, or token decode failures.
    pub async fn exchange_authorization_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenSet, AuthError> {
        debug!("exchanging authorization code for access token");

        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", &self.credentials.channel_id),
            ("client_secret", &self.credentials.channel_secret),
        ];

        let response = self
            .http
            .send(
                self.http
                    .request(Method::POST, &self.endpoints.token_url)
                    .form(&form),
            )
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Remote {
                status: status.as_u16(),
            });
        }

        let wire: TokenResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;

        info!("authorization code exchanged for access token");
        Ok(wire.into())
    }
}

#[async_trait]
impl TokenGrantor for ChannelTokenClient {
    async fn client_credentials_grant(&self) -> Result<TokenSet, AuthError> {
        debug!("requesting channel access token (client-credentials grant)");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", &self.credentials.channel_id),
            ("client_secret", &self.credentials.channel_secret),
        ];

        let response = self
            .http
            .send(
                self.http
                    .request(Method::POST, &self.endpoints.token_url)
                    .form(&form),
            )
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Remote {
                status: status.as_u16(),
            });
        }

        let wire: TokenResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;

        Ok(wire.into())
    }

    async fn revoke_token(&self, token: &str) -> Result<(), AuthError> {
        debug!("revoking access token");

        let form = [
            ("access_token", token),
            ("client_id", &self.credentials.channel_id),
            ("client_secret", &self.credentials.channel_secret),
        ];

        let response = self
            .http
            .send(
                self.http
                    .request(Method::POST, &self.endpoints.revocation_url)
                    .form(&form),
            )
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Remote {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

/// Map token lifecycle failures onto the client-facing error surface,
/// variant for variant. Only a genuinely missing or unusable token reads
/// as `Unauthenticated`; token-endpoint failures keep their own category.
pub(crate) fn map_auth_error(err: AuthError) -> LineError {
    match err {
        AuthError::NotAuthenticated => {
            LineError::Unauthenticated("no usable access token".into())
        }
        AuthError::Remote { status } => LineError::Remote { status },
        AuthError::Network(msg) => LineError::Network(msg),
        AuthError::Decode(msg) => LineError::Decode(msg),
    }
}
