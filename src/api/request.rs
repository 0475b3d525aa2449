//! Shared request executor for the Sendrefunds REST API client.
//!
//! Every endpoint method funnels through [`RequestExecutor::execute`], which
//! issues one HTTP call, normalizes the outcome into a parsed JSON payload or
//! an [`ApiError`], and invokes the caller's [`RequestHooks`] in order:
//! `on_start_request`, the network transport, then `on_success` or `on_error`.
//! The executor holds no state across calls; concurrent calls are independent.

use std::collections::HashMap;
use std::future::Future;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult, ProblemDetails};
use crate::network::Environment;

/// Hard per-request timeout. Applied to every call regardless of any
/// timeout carried by the descriptor.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One HTTP call, described up front and immutable once handed to the
/// executor. Constructed fresh per call and discarded when it completes.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Optional JSON body
    pub json: Option<Value>,
    /// Headers to apply on top of the executor defaults (key unique,
    /// order irrelevant; caller wins on collision)
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the target URI
    pub query: Vec<(String, String)>,
    /// Requested timeout. Accepted for wire-options parity only; the
    /// executor always enforces [`REQUEST_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    /// Descriptor for a body-less request with the given method.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            json: None,
            headers: Vec::new(),
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Descriptor for a GET request.
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// Descriptor for a POST request carrying a JSON body.
    pub fn post(json: Value) -> Self {
        let mut descriptor = Self::new(Method::POST);
        descriptor.json = Some(json);
        descriptor
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Request a timeout. Recorded on the descriptor but never honored
    /// beyond [`REQUEST_TIMEOUT`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the target URI with the descriptor's query string appended.
    fn resolved_url(&self, uri: &str) -> ApiResult<String> {
        if self.query.is_empty() {
            return Ok(uri.to_string());
        }
        let qs = serde_urlencoded::to_string(&self.query)
            .map_err(|e| ApiError::InvalidParameter(format!("invalid query parameters: {}", e)))?;
        if uri.contains('?') {
            Ok(format!("{}&{}", uri, qs))
        } else {
            Ok(format!("{}?{}", uri, qs))
        }
    }

    /// Build the header map for this call: `Accept: application/json` first,
    /// then the caller's headers, which replace defaults on key collision.
    fn header_map(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

/// Read-only snapshot of a transport response, passed to hooks.
///
/// Derived from the response before its body is consumed; lives only for the
/// duration of one call.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// Response headers (duplicate keys collapse to the last value)
    pub headers: HashMap<String, String>,
    /// Origin IP of the peer that produced the response
    pub ip: Option<IpAddr>,
    /// Transport retry count. Always zero; the executor performs no retries.
    pub retry_count: u32,
    /// HTTP status code
    pub status_code: u16,
    /// Canonical status message, when one exists for the code
    pub status_message: Option<String>,
    /// HTTP method used for the call
    pub method: Method,
    /// Fully resolved URL the transport ended up talking to
    pub url: String,
    /// Total call timing in milliseconds, dispatch to headers received
    pub timing_total_ms: u64,
}

impl ResponseEnvelope {
    fn from_response(response: &reqwest::Response, method: &Method, started: Instant) -> Self {
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        Self {
            headers,
            ip: response.remote_addr().map(|addr| addr.ip()),
            retry_count: 0,
            status_code: response.status().as_u16(),
            status_message: response.status().canonical_reason().map(str::to_owned),
            method: method.clone(),
            url: response.url().to_string(),
            timing_total_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// Lifecycle hooks invoked around every call.
///
/// All methods have no-op defaults; implement only what you observe. The
/// async hooks are awaited in the documented order with no concurrency
/// between them, and an error returned from any of them propagates to the
/// caller unguarded.
pub trait RequestHooks: Send + Sync {
    /// Invoked before the call is dispatched and awaited to completion.
    fn on_start_request(
        &self,
        uri: &str,
        descriptor: &RequestDescriptor,
    ) -> impl Future<Output = ApiResult<()>> + Send {
        let _ = (uri, descriptor);
        async { Ok(()) }
    }

    /// Invoked once the outcome is determined to be a success.
    ///
    /// `body` is the parsed payload, or `None` for an empty body and for a
    /// swallowed parse failure — in the latter case `error` carries the parse
    /// error as a non-fatal diagnostic and no envelope is supplied.
    fn on_success(
        &self,
        uri: &str,
        descriptor: &RequestDescriptor,
        body: Option<&Value>,
        envelope: Option<&ResponseEnvelope>,
        error: Option<&serde_json::Error>,
    ) -> impl Future<Output = ApiResult<()>> + Send {
        let _ = (uri, descriptor, body, envelope, error);
        async { Ok(()) }
    }

    /// Invoked once when the transport call fails or the body fails to parse
    /// and is not swallowed.
    ///
    /// `error` is the raw response body text when one was returned, otherwise
    /// the transport error's own description.
    fn on_error(
        &self,
        uri: &str,
        descriptor: &RequestDescriptor,
        error: &str,
        envelope: Option<&ResponseEnvelope>,
    ) -> impl Future<Output = ApiResult<()>> + Send {
        let _ = (uri, descriptor, error, envelope);
        async { Ok(()) }
    }

    /// Predicate deciding whether a body-parse failure should be treated as a
    /// success with an empty result rather than an error. Defaults to `false`.
    fn ignore_error(&self, error: &serde_json::Error) -> bool {
        let _ = error;
        false
    }
}

/// Hook bundle that observes nothing. The default for clients built without
/// explicit hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl RequestHooks for NoopHooks {}

/// Issues one HTTP call per [`execute`](Self::execute) invocation and
/// normalizes the outcome.
///
/// Stateless across calls; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RequestExecutor<H: RequestHooks = NoopHooks> {
    http: Client,
    hooks: H,
    /// Resolved once at construction; controls parse-error masking.
    production: bool,
}

impl<H: RequestHooks> RequestExecutor<H> {
    /// Create an executor over an already-built transport client.
    pub fn new(http: Client, hooks: H, environment: Environment) -> Self {
        Self {
            http,
            hooks,
            production: environment.is_production(),
        }
    }

    /// Execute one call described by `descriptor` against `uri`.
    ///
    /// Resolves to the parsed JSON body, or `None` for an empty body and for
    /// a parse failure the hooks opted to ignore. Every call produces exactly
    /// one terminal outcome: a parsed body, an empty result, or an error.
    pub async fn execute(
        &self,
        uri: &str,
        descriptor: RequestDescriptor,
    ) -> ApiResult<Option<Value>> {
        if uri.is_empty() {
            return Err(ApiError::InvalidParameter("uri cannot be empty".to_string()));
        }

        self.hooks.on_start_request(uri, &descriptor).await?;

        let url = descriptor.resolved_url(uri)?;
        let headers = descriptor.header_map()?;

        let mut request = self
            .http
            .request(descriptor.method.clone(), url.as_str())
            .headers(headers)
            .timeout(REQUEST_TIMEOUT);
        if let Some(body) = &descriptor.json {
            request = request.json(body);
        }

        tracing::debug!(method = %descriptor.method, url = %url, "dispatching request");
        let started = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                self.hooks
                    .on_error(uri, &descriptor, &error.to_string(), None)
                    .await?;
                return Err(ApiError::Http(error));
            }
        };

        let status = response.status();
        let envelope = ResponseEnvelope::from_response(&response, &descriptor.method, started);

        if !status.is_success() {
            let body_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(status = envelope.status_code, "failed to read error response body: {}", e);
                    String::new()
                }
            };
            let detail = if body_text.is_empty() {
                status.to_string()
            } else {
                body_text.clone()
            };
            self.hooks
                .on_error(uri, &descriptor, &detail, Some(&envelope))
                .await?;
            return Err(status_error(status, &body_text));
        }

        let body_text = response.text().await.map_err(ApiError::Http)?;
        if body_text.is_empty() {
            self.hooks
                .on_success(uri, &descriptor, None, Some(&envelope), None)
                .await?;
            tracing::debug!(
                status = envelope.status_code,
                elapsed_ms = envelope.timing_total_ms,
                "request completed with empty body"
            );
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&body_text) {
            Ok(body) => {
                self.hooks
                    .on_success(uri, &descriptor, Some(&body), Some(&envelope), None)
                    .await?;
                tracing::debug!(
                    status = envelope.status_code,
                    elapsed_ms = envelope.timing_total_ms,
                    "request completed"
                );
                Ok(Some(body))
            }
            Err(error) => {
                if self.hooks.ignore_error(&error) {
                    self.hooks
                        .on_success(uri, &descriptor, None, None, Some(&error))
                        .await?;
                    return Ok(None);
                }
                self.hooks
                    .on_error(uri, &descriptor, &error.to_string(), Some(&envelope))
                    .await?;
                if self.production {
                    Err(ApiError::BadGateway)
                } else {
                    Err(ApiError::Json(error))
                }
            }
        }
    }
}

/// Map a non-2xx response to an [`ApiError::Api`].
///
/// When the body parses as problem details carrying both `title` and
/// `detail`, the message is rewritten to the client-branded form; otherwise
/// the plain status description is kept.
fn status_error(status: StatusCode, body_text: &str) -> ApiError {
    let problem = serde_json::from_str::<ProblemDetails>(body_text).ok();
    let message = problem
        .as_ref()
        .and_then(ProblemDetails::branded_message)
        .unwrap_or_else(|| status.to_string());
    ApiError::Api {
        status: status.as_u16(),
        message,
        problem,
    }
}
