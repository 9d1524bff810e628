//! Message quota types.

use serde::{Deserialize, Serialize};

/// Monthly message quota for a channel.
///
/// `quota_type` is `"none"` for unlimited plans, `"limited"` otherwise;
/// `value` is only present for limited plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageQuota {
    #[serde(rename = "type")]
    pub quota_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Number of messages sent in the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaConsumption {
    pub total_usage: i64,
}
