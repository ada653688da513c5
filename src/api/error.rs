//! Error types for API calls and the classifier for failing responses.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::transport::{HttpError, HttpResponse};

/// A typed error reported by the Shop API.
///
/// Built from a failing response (status >= 400) by
/// [`ApiError::from_response`]. The server's error envelope is
/// `{"code": ..., "message": ..., "details": ...}`, every field optional.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message} (HTTP {status})")]
pub struct ApiError {
    /// HTTP status of the failing response
    pub status: StatusCode,
    /// Machine-readable error code, e.g. `invalid_sku`
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Structured details, if the server sent any
    pub details: Option<Value>,
}

impl ApiError {
    /// Code used when the envelope parsed but carried no `code`.
    pub const UNKNOWN_CODE: &'static str = "unknown";

    /// Code used when the body was not JSON at all.
    pub const HTTP_ERROR_CODE: &'static str = "http_error";

    /// Classifies a failing HTTP response into a typed error.
    ///
    /// - Body parses as JSON: `code` defaults to `"unknown"` and `message`
    ///   to the raw body text when absent. A JSON value that is not an
    ///   object counts as an envelope with every field absent.
    /// - Body is not JSON: code `"http_error"`, message
    ///   `"HTTP <status>: <body>"`.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let raw = response.body_lossy();
        let status = response.status;

        let Ok(envelope) = serde_json::from_slice::<Value>(&response.body) else {
            return Self {
                status,
                code: Self::HTTP_ERROR_CODE.to_string(),
                message: format!("HTTP {}: {raw}", status.as_u16()),
                details: None,
            };
        };

        Self {
            status,
            code: envelope_field(&envelope, "code")
                .and_then(envelope_text)
                .unwrap_or_else(|| Self::UNKNOWN_CODE.to_string()),
            message: envelope_field(&envelope, "message")
                .and_then(envelope_text)
                .unwrap_or(raw),
            details: envelope_field(&envelope, "details")
                .filter(|v| !v.is_null())
                .cloned(),
        }
    }

    /// Returns true if the error came from a status the retry policy retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        crate::transport::RetryPolicy::is_retryable_status(self.status)
    }
}

fn envelope_field<'a>(envelope: &'a Value, name: &str) -> Option<&'a Value> {
    envelope.as_object().and_then(|obj| obj.get(name))
}

/// Renders an envelope field as text; `null` counts as absent.
fn envelope_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Error type returned by every SDK operation.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The request never produced a response.
    ///
    /// Connection failures and timeouts surface here once the retry
    /// policy is exhausted.
    #[error("Transport failure after {attempts} attempt(s): {source}")]
    Transport {
        /// Number of attempts made
        attempts: u32,
        /// Last transport error observed
        #[source]
        source: HttpError,
    },

    /// The API answered with a 4xx/5xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response did not match the expected shape.
    #[error("Failed to decode {target}: {source}")]
    Decode {
        /// Type that was being decoded
        target: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Base URL and path did not form a valid URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A header value (API key or user agent) contains invalid characters.
    #[error("Invalid value for header '{name}'")]
    InvalidHeader {
        /// The header name
        name: &'static str,
    },
}

impl ShopError {
    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns true if this is an API error with a status the retry policy
    /// retries (429, 500, 502, 503, 504).
    #[must_use]
    pub fn is_retryable_status(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_transient)
    }

    /// Returns true for decode failures.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns true for transport failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
