//! REST API client module for Sendrefunds.
//!
//! This module provides a type-safe HTTP client for the Sendrefunds refunds
//! and payments REST API: business verification, access-token issuance,
//! invitations, orders, payments, and documents.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sendrefunds::api::SendrefundsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SendrefundsClient::builder()
//!         .authorization_bearer("partner-credential")
//!         .build()?;
//!
//!     // Derive an access token for a registered business
//!     let token = client
//!         .create_access_token_from_business_id("business-id", None)
//!         .await?;
//!
//!     if let Some(token) = token {
//!         let orders = client.get_order_list(&token).await?;
//!         println!("Orders: {:?}", orders);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return [`ApiResult<Option<T>>`](ApiResult). `Ok(None)` marks
//! an empty response body or a parse failure the installed hooks opted to
//! swallow; every other failure surfaces as an [`ApiError`]:
//!
//! ```rust,ignore
//! use sendrefunds::api::{ApiError, SendrefundsClient};
//!
//! match client.business_check("business-id").await {
//!     Ok(Some(check)) => println!("Found: {:?}", check.result),
//!     Ok(None) => println!("Empty response"),
//!     Err(ApiError::Api { status, message, .. }) => {
//!         println!("API rejected the call ({}): {}", status, message)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Lifecycle Hooks
//!
//! Install a [`RequestHooks`] implementation on the builder to observe every
//! call (`on_start_request`, `on_success`, `on_error`) or to swallow body
//! parse failures (`ignore_error`). See [`request`].

pub mod client;
pub mod error;
pub mod request;
pub mod types;

pub use client::{SendrefundsClient, SendrefundsClientBuilder};
pub use error::{ApiError, ApiResult, ProblemDetails};
pub use request::{
    NoopHooks, RequestDescriptor, RequestExecutor, RequestHooks, ResponseEnvelope, REQUEST_TIMEOUT,
};
pub use types::*;
