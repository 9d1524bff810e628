//! Messaging API client.
//!
//! Bot-side operations: message sends (reply/push/multicast/broadcast),
//! message content fetch, quota and delivery-status queries, user profiles,
//! account-link tokens, and webhook signature verification.
//!
//! Every operation follows the same shape: precondition check, token
//! ensure, one HTTP request, interpretation of the status and body. The
//! channel token is self-minted via the client-credentials grant whenever
//! the held one is absent or expired; an externally issued long-lived token
//! can be installed with [`MessagingClient::set_access_token`] instead.

use std::sync::Arc;
use std::time::Duration;

use line_sdk_common::{ChannelCredentials, SignatureVerifier, TokenHolder, TokenSet};
use line_sdk_domain::constants::MESSAGING_API_ROOT;
use line_sdk_domain::{
    DeliveryKind, DeliveryStatus, LineError, MessageQuota, OutboundMessage, QuotaConsumption,
    Result, UserProfile,
};
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::http::HttpClient;
use crate::oauth::{map_auth_error, ChannelTokenClient, TokenEndpoints};
use crate::outbound::{normalize_messages, validate_messages, validate_recipients, SendOptions};

/// Configuration for [`MessagingClient`].
#[derive(Debug, Clone)]
pub struct MessagingClientConfig {
    /// API root; override to point at a test server.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for MessagingClientConfig {
    fn default() -> Self {
        Self {
            base_url: MESSAGING_API_ROOT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the Messaging API (bot channel).
pub struct MessagingClient {
    base_url: String,
    holder: TokenHolder,
    verifier: SignatureVerifier,
    http: HttpClient,
}

impl MessagingClient {
    /// Create a client with default configuration.
    pub fn new(credentials: ChannelCredentials) -> Result<Self> {
        Self::with_config(credentials, MessagingClientConfig::default())
    }

    pub fn with_config(
        credentials: ChannelCredentials,
        config: MessagingClientConfig,
    ) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        let grantor = ChannelTokenClient::new(
            credentials.clone(),
            TokenEndpoints::messaging(&config.base_url),
            http.clone(),
        );

        Ok(Self {
            base_url: config.base_url,
            holder: TokenHolder::with_client_credentials(Arc::new(grantor)),
            verifier: SignatureVerifier::new(credentials.channel_secret),
            http,
        })
    }

    /// Install an externally issued channel access token.
    pub async fn set_access_token(&self, token: TokenSet) {
        self.holder.set_token(token).await;
    }

    /// Snapshot of the held token, if any.
    pub async fn access_token(&self) -> Option<TokenSet> {
        self.holder.token().await
    }

    /// Check an inbound webhook payload against the channel secret.
    pub fn verify_signature(&self, body: &[u8], signature: &str) -> bool {
        self.verifier.verify(body, signature)
    }

    /// Reply to a webhook event. The reply token is single-use and
    /// short-lived; a consumed or stale token surfaces as a remote error.
    pub async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
        opts: SendOptions,
    ) -> Result<()> {
        validate_messages(messages)?;
        let body = json!({
            "replyToken": reply_token,
            "messages": normalize_messages(messages),
            "notificationDisabled": opts.notification_disabled,
        });
        self.post_send("bot/message/reply", &body).await
    }

    /// Push messages to one user, group, or room.
    pub async fn send_push(
        &self,
        to: &str,
        messages: &[OutboundMessage],
        opts: SendOptions,
    ) -> Result<()> {
        validate_messages(messages)?;
        let body = json!({
            "to": to,
            "messages": normalize_messages(messages),
            "notificationDisabled": opts.notification_disabled,
        });
        self.post_send("bot/message/push", &body).await
    }

    /// Push messages to up to 150 users at once.
    pub async fn send_multicast(
        &self,
        user_ids: &[String],
        messages: &[OutboundMessage],
        opts: SendOptions,
    ) -> Result<()> {
        validate_recipients(user_ids)?;
        validate_messages(messages)?;
        let body = json!({
            "to": user_ids,
            "messages": normalize_messages(messages),
            "notificationDisabled": opts.notification_disabled,
        });
        self.post_send("bot/message/multicast", &body).await
    }

    /// Push messages to every friend of the bot.
    ///
    /// Wire-compatible with multicast: the request goes to the multicast
    /// endpoint without a recipient list.
    pub async fn send_broadcast(
        &self,
        messages: &[OutboundMessage],
        opts: SendOptions,
    ) -> Result<()> {
        validate_messages(messages)?;
        let body = json!({
            "messages": normalize_messages(messages),
            "notificationDisabled": opts.notification_disabled,
        });
        self.post_send("bot/message/multicast", &body).await
    }

    /// Fetch the binary content (image, video, audio) attached to a
    /// received message.
    pub async fn fetch_message_content(&self, message_id: &str) -> Result<Vec<u8>> {
        let path = format!("bot/message/{}/content", urlencoding::encode(message_id));
        let response = self
            .http
            .send(self.authorized(Method::GET, &path).await?)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LineError::Remote {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| LineError::Network(err.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// The month's message quota for this channel.
    pub async fn get_quota(&self) -> Result<MessageQuota> {
        let response = self
            .http
            .send(self.authorized(Method::GET, "bot/message/quota").await?)
            .await?;
        decode_body(response).await
    }

    /// Number of messages sent this month.
    pub async fn get_quota_consumption(&self) -> Result<i64> {
        let response = self
            .http
            .send(
                self.authorized(Method::GET, "bot/message/quota/consumption")
                    .await?,
            )
            .await?;
        let consumption: QuotaConsumption = decode_body(response).await?;
        Ok(consumption.total_usage)
    }

    /// Sentinel facade over [`Self::get_quota_consumption`]: `-1` on any
    /// failure, including when no token can be obtained (in which case no
    /// request is issued).
    pub async fn get_quota_total_usage(&self) -> i64 {
        self.get_quota_consumption().await.unwrap_or(-1)
    }

    /// Delivery counts for messages of the given kind on the given day.
    ///
    /// `date` is an 8-digit calendar date in UTC+09:00, passed through
    /// unconverted. Total by contract: every failure path yields the
    /// `failed` snapshot with a zero count.
    pub async fn get_delivery_status(&self, kind: DeliveryKind, date: &str) -> DeliveryStatus {
        let path = format!("bot/message/delivery/{}", kind.as_path());

        let builder = match self.authorized(Method::GET, &path).await {
            Ok(builder) => builder.query(&[("date", date)]),
            Err(err) => {
                debug!(error = %err, "delivery-status query could not be authenticated");
                return DeliveryStatus::failed(date);
            }
        };

        let response = match self.http.send(builder).await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(status = %response.status(), "delivery-status query rejected");
                return DeliveryStatus::failed(date);
            }
            Err(err) => {
                debug!(error = %err, "delivery-status query failed");
                return DeliveryStatus::failed(date);
            }
        };

        match response.json::<Value>().await {
            Ok(body) => DeliveryStatus::from_response(date, &body),
            Err(_) => DeliveryStatus::failed(date),
        }
    }

    /// Profile of a user who has friended the bot.
    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let path = format!("bot/profile/{}", urlencoding::encode(user_id));
        let response = self
            .http
            .send(self.authorized(Method::GET, &path).await?)
            .await?;
        decode_body(response).await
    }

    /// Issue an account-link token for the given user.
    pub async fn request_link_token(&self, user_id: &str) -> Result<String> {
        let path = format!("bot/user/{}/linkToken", urlencoding::encode(user_id));
        let response = self
            .http
            .send(self.authorized(Method::POST, &path).await?)
            .await?;
        let body: LinkTokenResponse = decode_body(response).await?;
        Ok(body.link_token)
    }

    /// POST a send body; `Ok` iff the platform answered 2xx.
    async fn post_send(&self, path: &str, body: &Value) -> Result<()> {
        let response = self
            .http
            .send(self.authorized(Method::POST, path).await?.json(body))
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LineError::Remote {
                status: status.as_u16(),
            })
        }
    }

    /// Build a bearer-authorized request, minting a token if needed.
    async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self
            .holder
            .ensure_valid_token()
            .await
            .map_err(map_auth_error)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token.access_token))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkTokenResponse {
    link_token: String,
}

/// Decode a 2xx JSON body; non-2xx is a remote error, undecodable JSON a
/// decode error.
async fn decode_body<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
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
