//! Sendrefunds REST API client implementation.
//!
//! The [`SendrefundsClient`] provides a type-safe interface for the
//! Sendrefunds refunds and payments REST API.
//!
//! # Example
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
//!     // Look up a business
//!     let check = client.business_check("business-id").await?;
//!     println!("Session token: {:?}", check.and_then(|c| c.result.session_token));
//!
//!     Ok(())
//! }
//! ```

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::{NoopHooks, RequestDescriptor, RequestExecutor, RequestHooks};
use crate::api::types::*;
use crate::network::Environment;

/// Default access-token lifetime for the derived token flow, in seconds.
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u32 = 60;

/// Default access-token lifetime when building a front-end URL, in seconds.
const DEFAULT_FRONT_URL_TTL_SECS: u32 = 3600;

/// Builder for configuring [`SendrefundsClient`].
#[derive(Debug, Clone)]
pub struct SendrefundsClientBuilder<H: RequestHooks = NoopHooks> {
    environment: Environment,
    authorization_bearer: String,
    base_url: Option<String>,
    hooks: H,
}

impl SendrefundsClientBuilder<NoopHooks> {
    /// Create a new builder with default settings (staging environment,
    /// empty partner credential, no hooks).
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            authorization_bearer: String::new(),
            base_url: None,
            hooks: NoopHooks,
        }
    }
}

impl Default for SendrefundsClientBuilder<NoopHooks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: RequestHooks> SendrefundsClientBuilder<H> {
    /// Select the deployment target. Staging unless set.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the partner credential sent as `Authorization: Bearer <token>` on
    /// every request.
    pub fn authorization_bearer(mut self, token: impl Into<String>) -> Self {
        self.authorization_bearer = token.into();
        self
    }

    /// Override the API base URL. Intended for tests and self-hosted
    /// deployments; the front-end origin still follows the environment.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Install a lifecycle hook bundle invoked around every request.
    pub fn hooks<H2: RequestHooks>(self, hooks: H2) -> SendrefundsClientBuilder<H2> {
        SendrefundsClientBuilder {
            environment: self.environment,
            authorization_bearer: self.authorization_bearer,
            base_url: self.base_url,
            hooks,
        }
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn build(self) -> ApiResult<SendrefundsClient<H>> {
        let http = Client::builder().pool_max_idle_per_host(10).build()?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.environment.api_url().to_string());

        Ok(SendrefundsClient {
            base_url,
            front_url: self.environment.front_url().to_string(),
            authorization_bearer: self.authorization_bearer,
            executor: RequestExecutor::new(http, self.hooks, self.environment),
        })
    }
}

/// Sendrefunds REST API client.
///
/// One method per remote endpoint, plus convenience flows deriving access
/// tokens and front-end URLs. Stateless; cloning shares the underlying
/// connection pool, and concurrent calls are fully independent.
#[derive(Debug, Clone)]
pub struct SendrefundsClient<H: RequestHooks = NoopHooks> {
    base_url: String,
    front_url: String,
    authorization_bearer: String,
    executor: RequestExecutor<H>,
}

impl SendrefundsClient<NoopHooks> {
    /// Create a client with default settings against the staging platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        SendrefundsClientBuilder::new().build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> SendrefundsClientBuilder<NoopHooks> {
        SendrefundsClientBuilder::new()
    }
}

impl<H: RequestHooks> SendrefundsClient<H> {
    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the front-end origin used by [`generate_front_url`](Self::generate_front_url).
    pub fn front_url(&self) -> &str {
        &self.front_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn bearer(&self) -> String {
        format!("Bearer {}", self.authorization_bearer)
    }

    /// Execute a GET request against `url`.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<Option<T>> {
        let descriptor = RequestDescriptor::get().header(AUTHORIZATION.as_str(), self.bearer());
        self.dispatch(url, descriptor).await
    }

    /// Execute a POST request with a JSON body against `url`.
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ApiResult<Option<T>> {
        let json = serde_json::to_value(body)?;
        let descriptor =
            RequestDescriptor::post(json).header(AUTHORIZATION.as_str(), self.bearer());
        self.dispatch(url, descriptor).await
    }

    /// Run the executor and decode the parsed payload into the wire type.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        url: &str,
        descriptor: RequestDescriptor,
    ) -> ApiResult<Option<T>> {
        match self.executor.execute(url, descriptor).await? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                ApiError::Deserialize(format!("failed to deserialize response: {}", e))
            }),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Business endpoints
    // =========================================================================

    /// Check whether a business is registered with Sendrefunds.
    ///
    /// A registered business yields a session token; an unregistered one
    /// yields a pending invitation.
    pub async fn business_check(&self, business_id: &str) -> ApiResult<Option<BusinessCheckResult>> {
        let url = format!(
            "{}/business/{}/check",
            self.base_url,
            urlencoding::encode(business_id)
        );
        self.get(&url).await
    }

    /// Invite a business contact to register with Sendrefunds.
    pub async fn send_invitation(
        &self,
        input: &SendInvitationInput,
    ) -> ApiResult<Option<SendInvitationResult>> {
        let url = format!("{}/invitations", self.base_url);
        self.post(&url, input).await
    }

    // =========================================================================
    // Token endpoints
    // =========================================================================

    /// Exchange a session token for an access token.
    pub async fn create_access_token(
        &self,
        input: &CreateAccessTokenInput,
    ) -> ApiResult<Option<CreateAccessTokenResult>> {
        let url = format!("{}/access-tokens", self.base_url);
        self.post(&url, input).await
    }

    /// Derive an access token directly from a business identifier.
    ///
    /// Runs the business check and the token exchange in sequence. Resolves
    /// to `Ok(None)` when either step leaves the expected field absent (an
    /// unregistered business, or a rejected exchange); neither miss is
    /// distinguished from the other.
    ///
    /// `ttl` is the token lifetime in seconds, 60 unless set.
    pub async fn create_access_token_from_business_id(
        &self,
        business_id: &str,
        ttl: Option<u32>,
    ) -> ApiResult<Option<String>> {
        let session_token = self
            .business_check(business_id)
            .await?
            .and_then(|check| check.result.session_token)
            .filter(|token| !token.is_empty());
        let Some(session_token) = session_token else {
            return Ok(None);
        };

        let issued = self
            .create_access_token(&CreateAccessTokenInput {
                session_token,
                ttl: ttl.unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            })
            .await?;
        Ok(issued
            .and_then(|token| token.result.access_token)
            .filter(|token| !token.is_empty()))
    }

    /// Build a user-facing front-end URL with a fresh access token embedded
    /// as a query parameter.
    ///
    /// Resolves to `Ok(None)` when no access token could be derived for the
    /// business. `ttl` is the token lifetime in seconds, 3600 unless set.
    pub async fn generate_front_url(
        &self,
        business_id: &str,
        ttl: Option<u32>,
    ) -> ApiResult<Option<String>> {
        let ttl = ttl.unwrap_or(DEFAULT_FRONT_URL_TTL_SECS);
        let Some(access_token) = self
            .create_access_token_from_business_id(business_id, Some(ttl))
            .await?
        else {
            return Ok(None);
        };
        Ok(Some(format!(
            "{}?access_token={}",
            self.front_url,
            urlencoding::encode(&access_token)
        )))
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Register a new order.
    pub async fn create_order(
        &self,
        input: &CreateOrderInput,
    ) -> ApiResult<Option<CreateOrderResult>> {
        let url = format!("{}/orders", self.base_url);
        self.post(&url, input).await
    }

    /// Get one order by guid.
    pub async fn get_order(&self, input: &GetOrderInput) -> ApiResult<Option<GetOrderResult>> {
        let url = format!(
            "{}/orders/{}/{}",
            self.base_url,
            urlencoding::encode(&input.access_token),
            urlencoding::encode(&input.order_guid)
        );
        self.get(&url).await
    }

    /// List all orders for the business the access token authorizes.
    pub async fn get_order_list(&self, access_token: &str) -> ApiResult<Option<GetOrdersResult>> {
        let url = format!(
            "{}/orders/{}",
            self.base_url,
            urlencoding::encode(access_token)
        );
        self.get(&url).await
    }

    /// List the payments recorded against one order.
    pub async fn get_order_payments(
        &self,
        input: &GetOrderInput,
    ) -> ApiResult<Option<GetOrderPaymentsResult>> {
        let url = format!(
            "{}/payments/{}/orders/{}",
            self.base_url,
            urlencoding::encode(&input.access_token),
            urlencoding::encode(&input.order_guid)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Payment endpoints
    // =========================================================================

    /// Record a payment against an order.
    pub async fn create_payment(
        &self,
        input: &CreatePaymentInput,
    ) -> ApiResult<Option<CreatePaymentResult>> {
        let url = format!("{}/payments", self.base_url);
        self.post(&url, input).await
    }

    /// Get one payment by reference.
    pub async fn get_payment(
        &self,
        input: &GetPaymentInput,
    ) -> ApiResult<Option<GetPaymentResult>> {
        let url = format!(
            "{}/payments/{}/{}",
            self.base_url,
            urlencoding::encode(&input.access_token),
            urlencoding::encode(&input.payment_reference)
        );
        self.get(&url).await
    }

    /// Get the order a payment settles.
    pub async fn get_payment_order(
        &self,
        input: &GetPaymentInput,
    ) -> ApiResult<Option<GetPaymentOrderResult>> {
        let url = format!(
            "{}/orders/{}/payments/{}",
            self.base_url,
            urlencoding::encode(&input.access_token),
            urlencoding::encode(&input.payment_reference)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Document endpoints
    // =========================================================================

    /// List the documents generated for the business the access token
    /// authorizes.
    pub async fn get_document_list(
        &self,
        access_token: &str,
    ) -> ApiResult<Option<GetDocumentsResult>> {
        let url = format!(
            "{}/documents/{}",
            self.base_url,
            urlencoding::encode(access_token)
        );
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{PRODUCTION_API_URL, STAGING_API_URL, STAGING_FRONT_URL};

    #[test]
    fn test_client_defaults_to_staging() {
        let client = SendrefundsClient::new().unwrap();
        assert_eq!(client.base_url(), STAGING_API_URL);
        assert_eq!(client.front_url(), STAGING_FRONT_URL);
    }

    #[test]
    fn test_client_production_environment() {
        let client = SendrefundsClient::builder()
            .environment(Environment::Production)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), PRODUCTION_API_URL);
        assert_eq!(client.front_url(), "https://app.sendrefunds.com");
    }

    #[test]
    fn test_client_builder_trims_base_url() {
        let client = SendrefundsClient::builder()
            .base_url("https://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://localhost:8080");
    }

    #[test]
    fn test_base_url_override_keeps_environment_front_url() {
        let client = SendrefundsClient::builder()
            .base_url("https://localhost:8080")
            .build()
            .unwrap();
        assert_eq!(client.front_url(), STAGING_FRONT_URL);
    }

    #[test]
    fn test_bearer_header_value() {
        let client = SendrefundsClient::builder()
            .authorization_bearer("abcd")
            .build()
            .unwrap();
        assert_eq!(client.bearer(), "Bearer abcd");
    }
}
