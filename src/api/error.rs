//! API error types for the Sendrefunds REST API client.

use thiserror::Error;

/// API-specific error type for the Sendrefunds REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest (connection failure, timeout, protocol)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    ///
    /// When the error body carried both `title` and `detail`, `message` is the
    /// client-branded concatenation `"Sendrefunds error: <title> <detail>"`;
    /// otherwise it is the plain status description.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Human-readable error message
        message: String,
        /// Parsed problem-details body, when the response carried one
        problem: Option<ProblemDetails>,
    },

    /// A success-status response body that was not valid JSON
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Production-mode mask for an invalid JSON body
    #[error("Sendrefunds error: bad gateway")]
    BadGateway,

    /// A valid JSON body that does not match the expected wire shape
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Error raised inside a lifecycle hook, propagated unguarded
    #[error("Hook error: {0}")]
    Hook(String),

    /// Invalid parameter provided by the caller
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// RFC7807-style problem details returned by the API on non-2xx responses.
///
/// Error responses are conventionally shaped
/// `{ "title": "...", "type": "...", "status": ..., "detail": "...", "error": "..." }`;
/// every field may be absent.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProblemDetails {
    /// Short summary of the problem class (e.g. "Bad Request")
    #[serde(default)]
    pub title: Option<String>,
    /// URI identifying the problem type
    #[serde(default, rename = "type")]
    pub problem_type: Option<String>,
    /// HTTP status code echoed in the body
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable explanation specific to this occurrence
    #[serde(default)]
    pub detail: Option<String>,
    /// Machine-oriented error label some endpoints add
    #[serde(default)]
    pub error: Option<String>,
}

impl ProblemDetails {
    /// The client-branded message, available when both `title` and `detail`
    /// are present.
    pub fn branded_message(&self) -> Option<String> {
        match (&self.title, &self.detail) {
            (Some(title), Some(detail)) => {
                Some(format!("Sendrefunds error: {} {}", title, detail))
            }
            _ => None,
        }
    }
}
