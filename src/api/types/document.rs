//! Document types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// A document generated for a business (invoices, settlement summaries).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// Server-assigned document identifier
    pub document_guid: String,
    /// Document kind label, e.g. `Invoice`
    #[serde(rename = "Type")]
    pub kind: String,
    /// Download URL
    pub url: String,
    pub created_on: String,
}

/// Response for `GET /documents/{access_token}`.
pub type GetDocumentsResult = Envelope<DocumentList>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentList {
    pub documents: Vec<Document>,
}
