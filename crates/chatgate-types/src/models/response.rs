//! Outgoing response bodies.

use serde::{Deserialize, Serialize};

use crate::protocol::Usage;

/// Successful completion relayed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionResult {
    pub success: bool,
    /// Assistant content; `null` when the provider returned no text
    pub response: Option<String>,
    /// The model that was requested, after defaulting
    pub model: String,
    pub usage: Usage,
}

impl CompletionResult {
    pub fn new(response: Option<String>, model: String, usage: Usage) -> Self {
        Self { success: true, response, model, usage }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: "healthy".to_string(), message: "Chat gateway is running".to_string() }
    }
}
