//! Request executor: the single chokepoint every API call goes through.

use std::time::Duration;

use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::models::decode;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, RetryPolicy};

use super::{ApiError, ApiRequest, ShopError};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.shop.com/v1";

/// Default per-call timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes [`ApiRequest`]s against the Shop API.
///
/// Resolves the path against the base URL, attaches the bearer token and
/// JSON headers, applies the per-call timeout, and retries transient
/// failures according to its [`RetryPolicy`]:
///
/// - transport failures (connection error, timeout) are retried;
/// - responses with status 429, 500, 502, 503 or 504 are retried;
/// - any other 4xx/5xx is classified into an [`ApiError`] immediately.
///
/// When retries run out, the last observed failure is returned.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper used between retries (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct Executor<H, S = TokioSleeper> {
    client: H,
    sleeper: S,
    base_url: String,
    api_key: SecretString,
    user_agent: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl<H> Executor<H, TokioSleeper> {
    /// Creates an executor with default base URL, timeout and retry policy.
    #[must_use]
    pub fn new(client: H, api_key: impl Into<String>) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(api_key.into()),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl<H, S> Executor<H, S> {
    /// Sets a custom sleeper for retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Executor<H, S2> {
        Executor {
            client: self.client,
            sleeper,
            base_url: self.base_url,
            api_key: self.api_key,
            user_agent: self.user_agent,
            timeout: self.timeout,
            retry_policy: self.retry_policy,
        }
    }

    /// Sets the API root every path is appended to.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the configured user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolves a request's path and query against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidUrl`] if the result is not a valid URL.
    pub fn resolve_url(&self, request: &ApiRequest) -> Result<Url, ShopError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), request.path);
        let mut url = Url::parse(&raw).map_err(|e| ShopError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .iter()
                    .map(|(name, value)| (*name, value.as_str())),
            );
        }

        Ok(url)
    }

    /// Builds the authenticated HTTP request for one logical call.
    fn build_http_request(&self, request: &ApiRequest) -> Result<HttpRequest, ShopError> {
        let url = self.resolve_url(request)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| ShopError::InvalidHeader {
                name: "Authorization",
            })?;
        auth.set_sensitive(true);

        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| ShopError::InvalidHeader { name: "User-Agent" })?;

        let http_request = HttpRequest::new(request.method.clone(), url)
            .with_header(AUTHORIZATION, auth)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(USER_AGENT, user_agent)
            .with_timeout(self.timeout);

        match &request.body {
            Some(body) => Ok(http_request
                .with_body(serde_json::to_vec(body).map_err(ShopError::Encode)?)),
            None => Ok(http_request),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Executor<H, S> {
    /// Executes a call and returns the raw JSON result.
    ///
    /// A 204 response (or any 2xx with an empty body) yields an empty object.
    ///
    /// # Errors
    ///
    /// - [`ShopError::Transport`] when no response could be obtained
    /// - [`ShopError::Api`] for 4xx/5xx responses
    /// - [`ShopError::Decode`] when a success body is not JSON
    /// - [`ShopError::InvalidUrl`], [`ShopError::InvalidHeader`],
    ///   [`ShopError::Encode`] when the request cannot be built
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ShopError> {
        let http_request = self.build_http_request(&request)?;
        let response = self.send_with_retry(&http_request).await?;
        parse_success(&response)
    }

    /// Executes a call and decodes the result into `T`.
    ///
    /// # Errors
    ///
    /// As [`Executor::execute`], plus [`ShopError::Decode`] when the body
    /// does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ShopError> {
        let value = self.execute(request).await?;
        decode(value)
    }

    /// Executes a call whose result carries no data.
    ///
    /// # Errors
    ///
    /// As [`Executor::execute`].
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ShopError> {
        self.execute(request).await.map(drop)
    }

    /// Sends the request, retrying transient failures.
    ///
    /// Returns the first 2xx response.
    async fn send_with_retry(&self, request: &HttpRequest) -> Result<HttpResponse, ShopError> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            debug!(method = %request.method, url = %request.url, attempt, "Sending API request");

            let failure = match self.client.request(request.clone()).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) => {
                    let error = ApiError::from_response(&response);
                    if !RetryPolicy::is_retryable_status(response.status) {
                        debug!(status = %response.status, code = %error.code, "API request failed");
                        return Err(error.into());
                    }
                    ShopError::Api(error)
                }
                Err(source) => {
                    let retryable = source.is_retryable();
                    let error = ShopError::Transport {
                        attempts: attempt,
                        source,
                    };
                    if !retryable {
                        return Err(error);
                    }
                    error
                }
            };

            if !self.retry_policy.should_retry(attempt) {
                warn!(attempts = attempt, error = %failure, "Giving up on API request");
                return Err(failure);
            }

            let delay = self.retry_policy.delay_for_retry(attempt - 1);
            warn!(
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %failure,
                "API request failed, retrying"
            );
            self.sleeper.sleep(delay).await;
        }
    }
}

/// Parses a 2xx response body as JSON.
fn parse_success(response: &HttpResponse) -> Result<Value, ShopError> {
    if response.status == StatusCode::NO_CONTENT
        || response.body.iter().all(u8::is_ascii_whitespace)
    {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&response.body).map_err(|source| ShopError::Decode {
        target: "response body",
        source,
    })
}

fn default_user_agent() -> String {
    format!("shop-rust-sdk/{}", env!("CARGO_PKG_VERSION"))
}
