//! Payment order and verification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_enum_conversions;

/// Settlement state of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum PaymentStatus {
    Created,
    Paid,
    Failed,
    Refunded,
}

impl_wire_enum_conversions!(PaymentStatus {
    Created => "created",
    Paid => "paid",
    Failed => "failed",
    Refunded => "refunded",
});

/// `POST /payments/create-order` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub plan_id: String,
}

/// Gateway order the UI hands to the checkout widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentOrder {
    pub order_id: String,
    /// Amount in the currency's minor unit
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub amount: u64,
    pub currency: String,
    pub plan_id: String,
    /// Public checkout key issued by the gateway
    #[serde(default)]
    pub key_id: Option<String>,
}

/// Gateway callback fields forwarded for server-side signature verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Outcome of `POST /payments/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentVerification {
    pub verified: bool,
    #[serde(default)]
    pub payment: Option<PaymentRecord>,
}

/// Stored payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentRecord {
    pub id: String,
    pub order_id: String,
    pub plan_id: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub amount: u64,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
