//! Request and response types for the Sendrefunds REST API.
//!
//! Response payloads mirror the remote wire shapes: every success body nests
//! under a `Result` field (see [`Envelope`]) with PascalCase member names,
//! while request bodies use snake_case. Organized by category.

use serde::{Deserialize, Serialize};

pub mod business;
pub mod document;
pub mod invitation;
pub mod order;
pub mod payment;
pub mod token;

// Re-export all types for convenience
pub use business::*;
pub use document::*;
pub use invitation::*;
pub use order::*;
pub use payment::*;
pub use token::*;

/// Wrapper used by every Sendrefunds success response: the payload nests
/// under a `Result` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload
    #[serde(rename = "Result")]
    pub result: T,
}
