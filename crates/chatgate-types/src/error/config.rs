//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building the gateway configuration at startup.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// A required setting was not provided or is blank
    #[error("Missing required setting: {name}")]
    Missing {
        /// Environment variable / flag name
        name: String,
    },

    /// A setting was provided but cannot be used
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// HTTP client could not be constructed
    #[error("Cannot initialize upstream client: {message}")]
    ClientBuild {
        /// Description of the builder failure
        message: String,
    },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError { field: field.into(), message: message.into() }
    }
}
