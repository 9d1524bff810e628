//! HTTP clients for the LINE platform.
//!
//! Two entry points, one per API family:
//! - [`MessagingClient`]: bot messaging (reply/push/multicast/broadcast),
//!   content fetch, quota and delivery-status queries, user profiles,
//!   link tokens, webhook signature checks
//! - [`SocialClient`]: LINE Login user operations (profile, friendship,
//!   access-token verification/revocation, id-token verification)
//!
//! Both clients hold their channel token in a
//! [`line_sdk_common::TokenHolder`]; the messaging client self-mints tokens
//! via the client-credentials grant, the social client only accepts tokens
//! supplied externally (authorization-code exchange via
//! [`ChannelTokenClient::exchange_authorization_code`]).
//!
//! Every operation performs at most one HTTP request. There is no retry and
//! no background refresh; callers own any retry policy.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod http;
mod oauth;
mod outbound;

pub mod messaging;
pub mod social;

pub use http::HttpClient;
pub use messaging::{MessagingClient, MessagingClientConfig};
pub use oauth::{ChannelTokenClient, TokenEndpoints};
pub use outbound::SendOptions;
pub use social::{SocialClient, SocialClientConfig};
