//! Order types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::payment::PaymentEntry;
use super::Envelope;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order registered, settlement pending
    #[serde(rename = "SRO1")]
    Open,
    /// Order fully settled
    #[serde(rename = "SRO2")]
    Settled,
}

/// Status of the payment owed to Sendrefunds for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomingPaymentStatus {
    #[serde(rename = "SROP1")]
    Pending,
    #[serde(rename = "SROP2")]
    Partial,
    #[serde(rename = "SROP3")]
    Paid,
}

/// Status of the payout from Sendrefunds for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutgoingPaymentStatus {
    #[serde(rename = "SROP1")]
    Pending,
    #[serde(rename = "SROP2")]
    Partial,
    #[serde(rename = "SROP3")]
    Paid,
    #[serde(rename = "SROP4")]
    Cancelled,
}

/// One line item of an order being created.
///
/// All monetary amounts are in the smallest currency unit (cents); all
/// percentages are integers scaled by 100 (10.00% is `1000`, valid range
/// 0-10000).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderLineItemInput {
    /// Supplier reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// SKU reference of the item
    pub sku_reference: String,
    /// A valid gitin reference of the item
    pub gitin_reference: String,
    /// Free-form item description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_description: Option<String>,
    pub number_of_items: u32,
    /// Unit net sale price
    pub sale_price_net: i64,
    /// Unit net purchase price
    pub purchase_price_net: i64,
    pub line_discount_percentage: u32,
    /// Total discount of the line (unit discount * number of items)
    pub line_total_discount_amount: i64,
    pub sale_tax_percentage: u32,
    /// Unit gross sale price
    pub sale_price_gross: i64,
    /// Total tax of the line (unit tax * number of items)
    pub line_total_tax_amount: i64,
    /// Total net amount of the line
    pub line_total_sale_amount_net: i64,
    /// Total gross amount of the line
    pub line_total_sale_amount_gross: i64,
}

/// Request body for `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderInput {
    /// Access token authorizing the operation for one business
    pub access_token: String,
    /// Order date, e.g. `2021-10-04`
    pub order_date: String,
    pub order_number: String,
    /// Currency code, e.g. `eur`
    pub currency: String,
    /// Total net sale amount in smallest currency unit (cents)
    pub total_sale_amount_net: i64,
    /// Total tax amount in smallest currency unit (cents)
    pub total_tax_amount: i64,
    /// Total gross sale amount in smallest currency unit (cents)
    pub total_sale_amount_gross: i64,
    pub line_items: Vec<CreateOrderLineItemInput>,
    pub client_name: String,
    pub client_address: String,
    pub client_street_number: String,
    pub client_postal_code: String,
    pub client_city: String,
    pub client_country: String,
    pub client_email: String,
}

/// Response for `POST /orders`.
pub type CreateOrderResult = Envelope<CreatedOrder>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedOrder {
    pub order: CreatedOrderRef,
}

/// Reference to a freshly created order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedOrderRef {
    /// Server-assigned order identifier
    pub order_guid: String,
}

/// Parameters for the order retrieval endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderInput {
    pub access_token: String,
    pub order_guid: String,
}

/// An order as returned by the retrieval endpoints.
///
/// The API omits the monetary fields for orders that have not settled yet, so
/// everything beyond the core identity fields is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_payment_status: Option<IncomingPaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_payment_status: Option<OutgoingPaymentStatus>,
    /// Link to the generated invoice document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Order total in smallest currency unit (cents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Remaining due amount in smallest currency unit (cents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_amount: Option<i64>,
    /// Order date, e.g. `2021-10-02 00:00:00`
    pub date: String,
    pub created_on: String,
    /// Payments recorded against this order
    #[serde(default)]
    pub payments: Vec<PaymentEntry>,
}

/// Response for `GET /orders/{access_token}/{order_guid}` and
/// `GET /orders/{access_token}/payments/{payment_reference}`.
pub type GetOrderResult = Envelope<OrderBody>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBody {
    pub order: Order,
}

/// Response for `GET /orders/{access_token}`.
pub type GetOrdersResult = Envelope<OrderList>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderList {
    pub orders: Vec<Order>,
}
