//! Shared machinery for the LINE SDK crates.
//!
//! Two concerns live here, both free of HTTP:
//! - `auth`: the access-token lifecycle (cache, validity, grant-on-demand,
//!   revoke) behind the [`auth::TokenGrantor`] seam
//! - `signature`: the HMAC-SHA256 authenticity check for inbound webhook
//!   payloads

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod auth;
pub mod signature;

pub use auth::{AuthError, ChannelCredentials, TokenGrantor, TokenHolder, TokenResponse, TokenSet};
pub use signature::SignatureVerifier;
