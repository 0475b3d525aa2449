//! Invitation types for the Sendrefunds REST API.

use serde::{Deserialize, Serialize};

use super::Envelope;

/// Request body for `POST /invitations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvitationInput {
    /// Primary email of the business and the contact. The invitee may edit it
    /// during onboarding. Maximum length is 100 characters.
    pub email: String,
    /// A valid country code (e.g. `fr`). Maximum length is 5 characters.
    pub country: String,
    /// A valid language code (e.g. `fr`). Maximum length is 5 characters.
    pub language: String,
    /// Identifier of an existing business to attach the invitation to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    /// The ext id of the partner. Maximum length is 45 characters.
    pub ext_id: String,
    /// URL to return to once the registration completed. Maximum length is
    /// 200 characters.
    pub return_url: String,
}

/// Response for `POST /invitations`.
pub type SendInvitationResult = Envelope<InvitationCreated>;

/// Created invitation, when the partner and business resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvitationCreated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation: Option<Invitation>,
}

/// Onboarding invitation handed to the business contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invitation {
    /// URL the invitee follows to complete registration
    pub url: String,
}
