//! Business verification types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::invitation::Invitation;
use super::Envelope;

/// Response for `GET /business/{business_id}/check`.
pub type BusinessCheckResult = Envelope<BusinessCheck>;

/// Outcome of a business lookup.
///
/// A registered business carries a session token ready to be exchanged for an
/// access token; an unregistered one carries an invitation URL instead. The
/// API may omit either field, so both are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessCheck {
    /// Intermediate credential exchanged for an access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Pending onboarding invitation for an unregistered business
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation: Option<Invitation>,
}
