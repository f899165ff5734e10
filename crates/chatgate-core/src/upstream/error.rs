//! Upstream failure classification.
//!
//! Every variant surfaces to the caller as the same `500` body; the split only
//! feeds logging.

use chatgate_types::protocol::ProviderErrorBody;
use chatgate_types::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("Error code: {status} - {message}")]
    Status { status: u16, message: String },

    /// Provider answered 2xx but the body is unusable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Build a status error, preferring the provider's own `error.message`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ProviderErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "empty response body".to_string()
                } else {
                    trimmed.to_string()
                }
            });
        Self::Status { status, message }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(e) if e.is_timeout() => "timeout",
            Self::Request(e) if e.is_connect() => "connect",
            Self::Request(_) => "transport",
            Self::Status { status: 401 | 403, .. } => "auth",
            Self::Status { status: 429, .. } => "rate_limit",
            Self::Status { .. } => "provider",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) => None,
        }
    }
}

impl From<UpstreamError> for GatewayError {
    fn from(err: UpstreamError) -> Self {
        GatewayError::upstream(err.to_string())
    }
}
