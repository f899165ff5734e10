//! Incoming request bodies and parameter defaulting.

use serde::{Deserialize, Deserializer, Serialize};

use crate::protocol::ChatMessage;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Body of `POST /chat`: a single user message.
///
/// `max_tokens` and `temperature` distinguish an absent key (`None`, the
/// default applies) from an explicit `null` (`Some(None)`, forwarded as is).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Option<f64>>,
}

impl ChatRequest {
    pub fn params(&self) -> CompletionParams {
        CompletionParams::resolve(self.model.clone(), self.max_tokens, self.temperature)
    }
}

/// Body of `POST /chat/conversation`: an ordered message history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Option<f64>>,
}

impl ConversationRequest {
    pub fn params(&self) -> CompletionParams {
        CompletionParams::resolve(self.model.clone(), self.max_tokens, self.temperature)
    }
}

/// Only called for keys that exist, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Sampling parameters after defaults have been applied.
///
/// `None` means the caller sent an explicit `null`: no output cap, or the
/// provider's own temperature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl CompletionParams {
    pub fn resolve(
        model: Option<String>,
        max_tokens: Option<Option<u32>>,
        temperature: Option<Option<f64>>,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: max_tokens.unwrap_or(Some(DEFAULT_MAX_TOKENS)),
            temperature: temperature.unwrap_or(Some(DEFAULT_TEMPERATURE)),
        }
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
