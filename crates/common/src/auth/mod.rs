//! Access-token lifecycle management.
//!
//! The messaging and social clients both own exactly one mutable token slot,
//! modeled by [`TokenHolder`]. The holder never talks HTTP itself; the
//! concrete grant/revocation calls live behind the [`TokenGrantor`] trait so
//! they can be swapped for mocks in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   TokenHolder    │  one token slot, validity check, revoke
//! └────────┬─────────┘
//!          │
//!          └──► TokenGrantor   (client-credentials grant + revocation,
//!                               implemented over HTTP in line-sdk-api)
//! ```

mod holder;
mod traits;
mod types;

pub use holder::TokenHolder;
pub use traits::TokenGrantor;
pub use types::{ChannelCredentials, TokenResponse, TokenSet};

/// Error type for token lifecycle operations
#[derive(Debug)]
pub enum AuthError {
    /// No token held, or the held token cannot be used for this operation
    NotAuthenticated,

    /// Transport-level failure while talking to the token endpoint
    Network(String),

    /// Token endpoint answered with a non-2xx status
    Remote { status: u16 },

    /// Token endpoint response could not be decoded
    Decode(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "Not authenticated (no usable token)"),
            Self::Network(msg) => write!(f, "Token endpoint unreachable: {msg}"),
            Self::Remote { status } => write!(f, "Token endpoint error: HTTP {status}"),
            Self::Decode(msg) => write!(f, "Token response decode error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}
