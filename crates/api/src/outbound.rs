//! Outbound request validation and message normalization.
//!
//! All checks run before any HTTP request: a rejected batch costs zero
//! network traffic. Cardinality limits are checked against the input as
//! given; normalization may drop invalid raw entries afterwards
//! (skip-invalid-continue), so a batch can legally shrink below its
//! validated size.

use line_sdk_domain::constants::{MESSAGES_MAX_COUNT, MULTICAST_MAX_RECIPIENTS};
use line_sdk_domain::{LineError, OutboundMessage, Result};
use serde_json::Value;
use tracing::warn;

/// Per-send options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendOptions {
    /// Suppress the push notification on the recipient's device.
    pub notification_disabled: bool,
}

/// Reject empty or over-limit message batches.
pub(crate) fn validate_messages(messages: &[OutboundMessage]) -> Result<()> {
    if messages.is_empty() {
        return Err(LineError::InvalidInput("message list is empty".into()));
    }
    if messages.len() > MESSAGES_MAX_COUNT {
        return Err(LineError::InvalidInput(format!(
            "message list has {} entries, limit is {MESSAGES_MAX_COUNT}",
            messages.len()
        )));
    }
    Ok(())
}

/// Reject empty or over-limit multicast recipient lists.
///
/// Checked before the message list, so a bad recipient list is reported
/// even when the messages are also invalid.
pub(crate) fn validate_recipients(user_ids: &[String]) -> Result<()> {
    if user_ids.is_empty() {
        return Err(LineError::InvalidInput("recipient list is empty".into()));
    }
    if user_ids.len() > MULTICAST_MAX_RECIPIENTS {
        return Err(LineError::InvalidInput(format!(
            "recipient list has {} entries, limit is {MULTICAST_MAX_RECIPIENTS}",
            user_ids.len()
        )));
    }
    Ok(())
}

/// Normalize a validated batch into wire JSON objects.
///
/// Typed messages serialize to their canonical objects; raw JSON objects
/// pass through verbatim. A raw value that is not a JSON object cannot be a
/// platform message, so it is dropped with a warning and the rest of the
/// batch continues.
pub(crate) fn normalize_messages(messages: &[OutboundMessage]) -> Vec<Value> {
    messages
        .iter()
        .filter_map(|message| match message.to_wire() {
            Some(wire) => Some(wire),
            None => {
                warn!("dropping raw message entry that is not a JSON object");
                None
            }
        })
        .collect()
}
