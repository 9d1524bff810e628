//! Error types used throughout the SDK

use thiserror::Error;

/// Main error type for LINE API operations.
///
/// The set is deliberately closed: every failure an operation can report
/// maps to exactly one of these reasons, so callers can tell a rejected
/// input apart from an unreachable server.
#[derive(Error, Debug)]
pub enum LineError {
    /// Rejected before any I/O (empty or over-limit batch, bad argument).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No valid access token held and none could be obtained.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// The platform answered with a non-2xx status.
    #[error("Remote error: HTTP {status}")]
    Remote { status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// Client-side configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for LINE API operations
pub type Result<T> = std::result::Result<T, LineError>;
