//! Network URL constants for the Sendrefunds SDK.

/// Production REST API base URL.
pub const PRODUCTION_API_URL: &str = "https://sendrefunds.io/v1";

/// Staging REST API base URL.
pub const STAGING_API_URL: &str = "https://staging.sendrefunds.io/v1";

/// Production front-end origin, used when building user-facing URLs.
pub const PRODUCTION_FRONT_URL: &str = "https://app.sendrefunds.com";

/// Staging front-end origin.
pub const STAGING_FRONT_URL: &str = "https://app-staging.sendrefunds.com";

/// Deployment target of the Sendrefunds platform.
///
/// Selects both the API origin and the companion front-end origin, and
/// controls whether body-parse failures are masked behind a generic
/// bad-gateway error (production) or surfaced verbatim (staging).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live platform at `sendrefunds.io`.
    Production,
    /// Staging platform at `staging.sendrefunds.io`.
    #[default]
    Staging,
}

impl Environment {
    /// REST API base URL for this environment.
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_API_URL,
            Environment::Staging => STAGING_API_URL,
        }
    }

    /// Front-end origin for this environment.
    pub fn front_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_FRONT_URL,
            Environment::Staging => STAGING_FRONT_URL,
        }
    }

    /// Whether this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}
