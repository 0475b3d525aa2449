//! Access-token types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// Request body for `POST /access-tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccessTokenInput {
    /// Session token obtained from a business check
    pub session_token: String,
    /// Token lifetime in seconds
    pub ttl: u32,
}

/// Response for `POST /access-tokens`.
pub type CreateAccessTokenResult = Envelope<IssuedAccessToken>;

/// Issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IssuedAccessToken {
    /// Bearer credential authorizing order and payment operations for one
    /// business. Optional because error-shaped bodies may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}
