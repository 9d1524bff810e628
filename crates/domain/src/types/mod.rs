//! Domain data types for the Messaging and Social APIs.

pub mod delivery;
pub mod message;
pub mod profile;
pub mod quota;
pub mod social;

pub use delivery::{DeliveryKind, DeliveryOutcome, DeliveryStatus};
pub use message::OutboundMessage;
pub use profile::UserProfile;
pub use quota::{MessageQuota, QuotaConsumption};
pub use social::{FriendshipStatus, TokenInfo};
