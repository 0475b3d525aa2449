//! # Sendrefunds Rust SDK
//!
//! A Rust client for the Sendrefunds refunds and payments REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client — business verification, access tokens,
//!   invitations, orders, payments, and documents
//! - [`network`]: Deployment environments and endpoint constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sendrefunds::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SendrefundsClient::builder()
//!         .environment(Environment::Staging)
//!         .authorization_bearer("partner-credential")
//!         .build()?;
//!
//!     // Check a business and exchange its session token for an access token
//!     let access_token = client
//!         .create_access_token_from_business_id("business-id", None)
//!         .await?;
//!
//!     // Build a user-facing URL for the companion front-end
//!     let url = client.generate_front_url("business-id", None).await?;
//!     println!("Front URL: {:?}", url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Observing Requests
//!
//! Every call runs through a shared request executor that invokes an
//! optional hook bundle around the transport. Implement
//! [`RequestHooks`](api::RequestHooks) to log, meter, or record calls, or to
//! treat malformed success bodies as empty results:
//!
//! ```rust,ignore
//! use sendrefunds::api::{RequestDescriptor, RequestHooks};
//!
//! struct Metrics;
//!
//! impl RequestHooks for Metrics {
//!     fn ignore_error(&self, _error: &serde_json::Error) -> bool {
//!         true
//!     }
//! }
//!
//! let client = SendrefundsClient::builder().hooks(Metrics).build()?;
//! ```

/// REST API client module.
pub mod api;

/// Deployment environments and endpoint URL constants.
pub mod network;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use sendrefunds::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, NoopHooks, ProblemDetails, RequestDescriptor, RequestExecutor,
        RequestHooks, ResponseEnvelope, SendrefundsClient, SendrefundsClientBuilder,
    };

    // Wire types
    pub use crate::api::types::{
        BusinessCheck, BusinessCheckResult, CreateAccessTokenInput, CreateAccessTokenResult,
        CreateOrderInput, CreateOrderLineItemInput, CreateOrderResult, CreatePaymentInput,
        CreatePaymentResult, Document, Envelope, GetDocumentsResult, GetOrderInput,
        GetOrderPaymentsResult, GetOrderResult, GetOrdersResult, GetPaymentInput,
        GetPaymentOrderResult, GetPaymentResult, IncomingPaymentStatus, Invitation,
        IssuedAccessToken, Order, OrderStatus, OutgoingPaymentStatus, Payment,
        PaymentGatewayResult, PaymentStatus, SendInvitationInput, SendInvitationResult,
    };

    // Environment constants
    pub use crate::network::{
        Environment, PRODUCTION_API_URL, PRODUCTION_FRONT_URL, STAGING_API_URL, STAGING_FRONT_URL,
    };
}
