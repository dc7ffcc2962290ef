//! Subscription plan types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_enum_conversions;

/// Purchasable plan listed by `GET /plans/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the currency's minor unit
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub price: u64,
    pub currency: String,
    pub duration_days: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// State of an employee's subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

impl_wire_enum_conversions!(SubscriptionStatus {
    Active => "active",
    Expired => "expired",
    Cancelled => "cancelled",
});

/// Plan currently attached to the signed-in employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EmployeePlan {
    pub id: String,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl EmployeePlan {
    /// Active and not past its expiry at `now`
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.status == SubscriptionStatus::Active && now < self.expires_at
    }
}

/// `POST /employee/plan/subscribe` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub plan_id: String,
    /// Verified payment backing a paid plan; free plans send none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

const fn default_true() -> bool {
    true
}
