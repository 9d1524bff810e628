//! Delivery status reporting types.

use serde::{Deserialize, Serialize};

/// Category of sent messages a delivery-status query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryKind {
    Reply,
    Push,
    Multicast,
    Broadcast,
}

impl DeliveryKind {
    /// Wire path segment under `bot/message/delivery/`.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::Push => "push",
            Self::Multicast => "multicast",
            Self::Broadcast => "broadcast",
        }
    }
}

/// Aggregation state reported for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOutcome {
    /// Counts are finalized and available.
    Ready,
    /// Aggregation still in progress.
    Ongoing,
    /// Aggregation has not started for the requested day.
    Unready,
    /// The query failed; also the local sentinel for any client-side failure.
    Failed,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Ongoing => "ongoing",
            Self::Unready => "unready",
            Self::Failed => "failed",
        }
    }
}

/// Wire shape of a delivery-status response body.
#[derive(Debug, Deserialize)]
pub(crate) struct DeliveryStatusResponse {
    pub status: DeliveryOutcome,
    #[serde(default)]
    pub success: i64,
}

/// Immutable snapshot of one delivery-status query.
///
/// Constructed once per query response and never mutated. The query itself
/// is total: a failed query still produces a snapshot, with
/// [`DeliveryOutcome::Failed`] and a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    /// The queried 8-digit calendar date (UTC+09:00), echoed back as given.
    pub date: String,
    pub status: DeliveryOutcome,
    pub successful_count: i64,
}

impl DeliveryStatus {
    /// Sentinel snapshot used for every failure path.
    pub fn failed(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            status: DeliveryOutcome::Failed,
            successful_count: 0,
        }
    }

    /// Build a snapshot from a decoded response body.
    pub fn from_response(date: impl Into<String>, body: &serde_json::Value) -> Self {
        let date = date.into();
        match serde_json::from_value::<DeliveryStatusResponse>(body.clone()) {
            Ok(response) => Self {
                date,
                status: response.status,
                successful_count: response.success,
            },
            Err(_) => Self::failed(date),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for types::delivery.
    use serde_json::json;

    use super::*;

    /// Validates `DeliveryStatus::from_response` behavior for the ready
    /// response scenario.
    ///
    /// Assertions:
    /// - Confirms `status` equals `DeliveryOutcome::Ready`.
    /// - Confirms `successful_count` equals `37`.
    #[test]
    fn test_ready_response() {
        let status = DeliveryStatus::from_response(
            "20260825",
            &json!({ "status": "ready", "success": 37 }),
        );
        assert_eq!(status.date, "20260825");
        assert_eq!(status.status, DeliveryOutcome::Ready);
        assert_eq!(status.successful_count, 37);
    }

    /// Validates `DeliveryStatus::from_response` behavior for the missing
    /// count scenario.
    ///
    /// Assertions:
    /// - Confirms an absent `success` member defaults to `0`.
    #[test]
    fn test_missing_success_defaults_to_zero() {
        let status =
            DeliveryStatus::from_response("20260825", &json!({ "status": "unready" }));
        assert_eq!(status.status, DeliveryOutcome::Unready);
        assert_eq!(status.successful_count, 0);
    }

    /// Validates `DeliveryStatus::from_response` behavior for the unknown
    /// status scenario.
    ///
    /// Assertions:
    /// - Ensures an undecodable body folds into the `failed` sentinel.
    #[test]
    fn test_unknown_status_folds_into_failed() {
        let status = DeliveryStatus::from_response(
            "20260825",
            &json!({ "status": "mystery", "success": 5 }),
        );
        assert_eq!(status, DeliveryStatus::failed("20260825"));
    }

    /// Validates the delivery kind path mapping scenario.
    ///
    /// Assertions:
    /// - Confirms each kind maps to its wire path segment.
    #[test]
    fn test_delivery_kind_paths() {
        assert_eq!(DeliveryKind::Reply.as_path(), "reply");
        assert_eq!(DeliveryKind::Push.as_path(), "push");
        assert_eq!(DeliveryKind::Multicast.as_path(), "multicast");
        assert_eq!(DeliveryKind::Broadcast.as_path(), "broadcast");
    }
}
