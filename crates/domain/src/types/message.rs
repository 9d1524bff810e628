//! Outbound message objects.
//!
//! Every variant serializes to the canonical JSON object the Messaging API
//! expects: a `type` discriminant plus variant-specific fields. A raw
//! key-value map is also accepted and passed through unchanged, which keeps
//! the SDK forward-compatible with message types it does not model yet.

use serde_json::{json, Value};

/// A message object to be delivered via reply/push/multicast/broadcast.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    /// Plain text message.
    Text { text: String },

    /// Image message with a full-size and a preview URL.
    Image {
        original_content_url: String,
        preview_image_url: String,
    },

    /// Sticker message identified by package and sticker ids.
    Sticker {
        package_id: String,
        sticker_id: String,
    },

    /// Untyped message object, sent verbatim.
    ///
    /// Must be a JSON object carrying its own `type` member; anything else
    /// is dropped during normalization.
    Raw(Value),
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(
        original_content_url: impl Into<String>,
        preview_image_url: impl Into<String>,
    ) -> Self {
        Self::Image {
            original_content_url: original_content_url.into(),
            preview_image_url: preview_image_url.into(),
        }
    }

    pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
        Self::Sticker {
            package_id: package_id.into(),
            sticker_id: sticker_id.into(),
        }
    }

    pub fn raw(value: Value) -> Self {
        Self::Raw(value)
    }

    /// The `type` discriminant, or `None` for raw maps without one.
    pub fn message_type(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => Some("text"),
            Self::Image { .. } => Some("image"),
            Self::Sticker { .. } => Some("sticker"),
            Self::Raw(value) => value.get("type").and_then(Value::as_str),
        }
    }

    /// Canonical wire form of this message.
    ///
    /// Typed variants produce their fixed field set; raw JSON objects pass
    /// through verbatim. Returns `None` for raw values that are not JSON
    /// objects — those carry no usable message shape.
    pub fn to_wire(&self) -> Option<Value> {
        match self {
            Self::Text { text } => Some(json!({ "type": "text", "text": text })),
            Self::Image {
                original_content_url,
                preview_image_url,
            } => Some(json!({
                "type": "image",
                "originalContentUrl": original_content_url,
                "previewImageUrl": preview_image_url,
            })),
            Self::Sticker {
                package_id,
                sticker_id,
            } => Some(json!({
                "type": "sticker",
                "packageId": package_id,
                "stickerId": sticker_id,
            })),
            Self::Raw(value) if value.is_object() => Some(value.clone()),
            Self::Raw(_) => None,
        }
    }
}
