//! Wire constants shared by the API clients.

/// Versioned root of the Messaging API.
pub const MESSAGING_API_ROOT: &str = "https://api.line.me/v2/";

/// Root of the Social API (LINE Login).
pub const SOCIAL_API_ROOT: &str = "https://api.line.me/";

/// Maximum number of message objects accepted by one send call.
pub const MESSAGES_MAX_COUNT: usize = 5;

/// Maximum number of explicit recipients accepted by one multicast call.
pub const MULTICAST_MAX_RECIPIENTS: usize = 150;
