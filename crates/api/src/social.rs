//! Social API (LINE Login) client.
//!
//! User-scoped operations: profile fetch, friendship lookup, access-token
//! introspection and revocation, id-token verification. Unlike the
//! messaging client, this client never mints its own token: user tokens
//! come out of the authorization-code flow
//! ([`crate::ChannelTokenClient::exchange_authorization_code`]) and are
//! installed with [`SocialClient::set_access_token`].

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use line_sdk_common::{ChannelCredentials, TokenHolder, TokenSet};
use line_sdk_domain::constants::SOCIAL_API_ROOT;
use line_sdk_domain::{FriendshipStatus, LineError, Result, TokenInfo, UserProfile};
use reqwest::{Method, Response};
use serde_json::Value;
use tracing::debug;

use crate::http::HttpClient;
use crate::oauth::{map_auth_error, ChannelTokenClient, TokenEndpoints};

/// Configuration for [`SocialClient`].
#[derive(Debug, Clone)]
pub struct SocialClientConfig {
    /// API root; override to point at a test server.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SocialClientConfig {
    fn default() -> Self {
        Self {
            base_url: SOCIAL_API_ROOT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the Social API (LINE Login channel).
pub struct SocialClient {
    base_url: String,
    credentials: ChannelCredentials,
    holder: TokenHolder,
    http: HttpClient,
}

impl SocialClient {
    /// Create a client with default configuration.
    pub fn new(credentials: ChannelCredentials) -> Result<Self> {
        Self::with_config(credentials, SocialClientConfig::default())
    }

    pub fn with_config(credentials: ChannelCredentials, config: SocialClientConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        let grantor = ChannelTokenClient::new(
            credentials.clone(),
            TokenEndpoints::social(&config.base_url),
            http.clone(),
        );

        Ok(Self {
            base_url: config.base_url,
            credentials,
            holder: TokenHolder::external_only(Arc::new(grantor)),
            http,
        })
    }

    /// Install a user access token (from the authorization-code exchange).
    pub async fn set_access_token(&self, token: TokenSet) {
        self.holder.set_token(token).await;
    }

    /// Snapshot of the held token, if any.
    pub async fn access_token(&self) -> Option<TokenSet> {
        self.holder.token().await
    }

    /// Profile of the user the held token belongs to.
    pub async fn get_profile(&self) -> Result<UserProfile> {
        let token = self.held_token().await?;
        let response = self.get_with_bearer("v2/profile", &token).await?;
        decode_body(response).await
    }

    /// Whether the user has friended the channel's official account.
    /// An absent `friendFlag` member reads as `false`.
    pub async fn has_friendship(&self) -> Result<bool> {
        let token = self.held_token().await?;
        let response = self.get_with_bearer("friendship/v1/status", &token).await?;
        let status: FriendshipStatus = decode_body(response).await?;
        Ok(status.friend_flag)
    }

    /// Introspect an access token; defaults to the held one.
    ///
    /// Rejects the token when the response carries an `error` member or
    /// when its `client_id` is not this channel's id, even on a 2xx
    /// status. `iat` is synthesized from the response `Date` header
    /// (falling back to the local clock) and `exp = iat + expires_in`.
    pub async fn verify_access_token(&self, token: Option<&str>) -> Result<TokenInfo> {
        let held;
        let token = match token {
            Some(token) => token,
            None => {
                held = self.held_token().await?;
                &held.access_token
            }
        };

        let url = format!("{}oauth2/v2.1/verify", self.base_url);
        let response = self
            .http
            .send(
                self.http
                    .request(Method::GET, url)
                    .query(&[("access_token", token)]),
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LineError::Remote {
                status: status.as_u16(),
            });
        }

        let iat = issued_at_from_headers(&response);
        let body: Value = response
            .json()
            .await
            .map_err(|err| LineError::Decode(err.to_string()))?;

        if let Some(error) = body.get("error") {
            debug!(%error, "access token introspection reported an error");
            return Err(LineError::Unauthenticated(format!(
                "token verification failed: {error}"
            )));
        }

        let mut info: TokenInfo = serde_json::from_value(body)
            .map_err(|err| LineError::Decode(err.to_string()))?;

        // A valid token minted for some other channel is still unusable here.
        if info.client_id != self.credentials.channel_id {
            return Err(LineError::Unauthenticated(format!(
                "token belongs to channel {}, not {}",
                info.client_id, self.credentials.channel_id
            )));
        }

        info.iat = iat;
        info.exp = iat + info.expires_in;
        Ok(info)
    }

    /// Revoke the held token; the slot is cleared only on success.
    pub async fn revoke_access_token(&self) -> Result<()> {
        self.holder.revoke().await.map_err(map_auth_error)
    }

    /// Verify an id token (JWT) at the platform's verification endpoint and
    /// return the decoded claim map. No local cryptographic verification is
    /// performed; trust is delegated to the endpoint.
    pub async fn verify_id_token(
        &self,
        id_token: &str,
        nonce: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Value> {
        let mut form = vec![
            ("id_token", id_token),
            ("client_id", &self.credentials.channel_id),
        ];
        if let Some(nonce) = nonce {
            form.push(("nonce", nonce));
        }
        if let Some(user_id) = user_id {
            form.push(("userId", user_id));
        }

        let url = format!("{}oauth2/v2.1/verify", self.base_url);
        let response = self
            .http
            .send(self.http.request(Method::POST, url).form(&form))
            .await?;
        decode_body(response).await
    }

    async fn held_token(&self) -> Result<TokenSet> {
        self.holder
            .token()
            .await
            .ok_or_else(|| LineError::Unauthenticated("no user access token held".into()))
    }

    async fn get_with_bearer(&self, path: &str, token: &TokenSet) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .send(
                self.http
                    .request(Method::GET, url)
                    .bearer_auth(&token.access_token),
            )
            .await
    }
}

/// Issued-at timestamp from the response `Date` header, falling back to
/// the local clock when the header is absent or unparsable.
fn issued_at_from_headers(response: &Response) -> i64 {
    response
        .headers()
        .get(reqwest::header::DATE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| chrono::DateTime::parse_from_rfc2822(value).ok())
        .map(|date| date.timestamp())
        .unwrap_or_else(|| Utc::now().timestamp())
}

/// Decode a 2xx JSON body; non-2xx is a remote error, undecodable JSON a
/// decode error.
async fn decode_body<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(LineError::Remote {
            status: status.as_u16(),
        });
    }
    response
        .json()
        .await
        .map_err(|err| LineError::Decode(err.to_string()))
}
