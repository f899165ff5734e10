//! Typed error definitions for Chatgate.
//!
//! Each client-facing failure kind has a fixed HTTP status and body shape:
//!
//! - **Validation** - malformed or missing input, `400 {"error": ...}`
//! - **PayloadTooLarge** - body over the server's limit, `413 {"error": ...}`
//! - **Upstream** - any failure of the completion call, `500 {"success": false, "error": ...}`

mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Error returned by the gateway operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// Client input was absent, unparseable, or failed validation
    #[error("{message}")]
    Validation { message: String },

    /// Request body exceeded the configured size limit
    #[error("{message}")]
    PayloadTooLarge { message: String },

    /// The upstream completion call failed; `message` is the raw error text
    #[error("{message}")]
    Upstream { message: String },
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge { message: message.into() }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream { message: message.into() }
    }

    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::PayloadTooLarge { .. })
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::Upstream { .. } => 500,
        }
    }

    /// JSON body sent back to the caller.
    pub fn response_body(&self) -> Value {
        match self {
            Self::Validation { message } | Self::PayloadTooLarge { message } => {
                json!({ "error": message })
            },
            Self::Upstream { message } => json!({ "success": false, "error": message }),
        }
    }
}

/// Standard Result type using GatewayError.
pub type Result<T> = std::result::Result<T, GatewayError>;
