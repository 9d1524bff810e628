//! Webhook signature verification.
//!
//! Inbound webhook requests carry an `X-Line-Signature` header: the
//! base64-encoded HMAC-SHA256 of the raw request body, keyed with the
//! channel secret. Verification recomputes the digest over the exact raw
//! bytes and compares in constant time.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies webhook payload authenticity against the channel secret.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    channel_secret: String,
}

impl SignatureVerifier {
    pub fn new(channel_secret: impl Into<String>) -> Self {
        Self {
            channel_secret: channel_secret.into(),
        }
    }

    /// Compute the expected signature for a raw request body.
    ///
    /// The body must be the exact bytes as received; any re-serialization
    /// (key reordering, whitespace changes) produces a different digest.
    #[must_use]
    pub fn compute(&self, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.channel_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(body);
        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Check a provided signature against the raw request body.
    ///
    /// Returns `false` for a digest mismatch and for malformed input
    /// (signature that is not valid base64, empty string). The comparison
    /// is constant-time.
    #[must_use]
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        let Ok(provided) = BASE64.decode(signature) else {
            return false;
        };

        let mut mac = HmacSha256::new_from_slice(self.channel_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(body);
        mac.verify_slice(&provided).is_ok()
    }
}
