//! Payment types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::order::OrderBody;
use super::Envelope;

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "SRP1")]
    Pending,
    #[serde(rename = "SRP2")]
    Confirmed,
    #[serde(rename = "SRP3")]
    Rejected,
}

/// Settlement details reported by the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentGatewayResult {
    /// Gross amount in smallest currency unit (cents)
    pub amount: i64,
    /// Gateway fee in smallest currency unit (cents)
    pub fee: i64,
    /// Amount net of fees in smallest currency unit (cents)
    pub net_amount: i64,
    pub description: String,
    /// Gateway-specific status label
    pub status: String,
}

/// A payment as returned by the retrieval endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    /// Partner-supplied payment reference
    pub reference: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Payment date, e.g. `2021-10-04`
    pub date: String,
    pub created_on: String,
    /// Absent until the gateway has settled the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_gateway_result: Option<PaymentGatewayResult>,
}

/// One element of a payment list. The API wraps each entry under its own
/// `Result` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentEntry {
    pub result: Payment,
}

/// Request body for `POST /payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentInput {
    /// Access token authorizing the operation for one business
    pub access_token: String,
    /// Payment date, e.g. `2021-10-04`
    pub payment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Order the payment settles
    pub order_guid: String,
    /// Partner-side payment reference, unique per payment
    pub reference: String,
}

/// Response for `POST /payments`.
pub type CreatePaymentResult = Envelope<CreatedPayment>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedPayment {
    pub payment: CreatedPaymentRef,
}

/// Reference to a freshly created payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedPaymentRef {
    /// Server-assigned payment identifier
    pub payment_guid: String,
}

/// Parameters for the payment retrieval endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPaymentInput {
    pub access_token: String,
    pub payment_reference: String,
}

/// Response for `GET /payments/{access_token}/{payment_reference}`.
pub type GetPaymentResult = Envelope<PaymentBody>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentBody {
    pub payment: Payment,
}

/// Response for `GET /orders/{access_token}/payments/{payment_reference}` —
/// the order a payment settles.
pub type GetPaymentOrderResult = Envelope<OrderBody>;

/// Response for `GET /payments/{access_token}/orders/{order_guid}`.
pub type GetOrderPaymentsResult = Envelope<PaymentList>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentList {
    pub payments: Vec<PaymentEntry>,
}
