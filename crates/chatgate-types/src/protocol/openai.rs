//! OpenAI ChatCompletions API types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::CompletionParams;

/// Chat message exchanged with the upstream.
///
/// `role` and `content` are kept as raw JSON (`content` may be `null` on an
/// assistant turn carrying `tool_calls`, or an array of parts) and other keys
/// land in `extra`, so a conversation is forwarded exactly as the caller sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Value,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Value::String(role.into()),
            content: Value::String(content.into()),
            extra: Map::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// `null` lifts the output cap
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(params: CompletionParams, messages: Vec<ChatMessage>) -> Self {
        let CompletionParams { model, max_tokens, temperature } = params;
        Self { model, messages, max_tokens, temperature }
    }
}

/// Response body of a non-streaming completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: AssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI usage statistics. Counters the provider leaves out read as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error envelope returned by the provider on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_keeps_extra_keys() {
        let raw = json!({"role": "user", "content": "hi", "name": "alice"});
        let message: ChatMessage = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(message.role, "user");
        assert_eq!(message.extra.get("name"), Some(&json!("alice")));
        assert_eq!(serde_json::to_value(&message).unwrap(), raw);
    }

    #[test]
    fn test_message_content_is_not_reshaped() {
        for raw in [
            json!({"role": "assistant", "content": null, "tool_calls": []}),
            json!({"role": "user", "content": [{"type": "text", "text": "hi"}]}),
        ] {
            let message: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&message).unwrap(), raw);
        }
    }

    #[test]
    fn test_user_message_has_no_extra_keys() {
        let value = serde_json::to_value(ChatMessage::user("hello")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_request_serialization() {
        let params = CompletionParams {
            model: "gpt-4o".to_string(),
            max_tokens: Some(42),
            temperature: Some(0.2),
        };
        let request = ChatCompletionRequest::new(params, vec![ChatMessage::user("hello")]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hello"}],
                "max_tokens": 42,
                "temperature": 0.2
            })
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        });
        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();

        assert!(response.usage.is_none());
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_request_serializes_lifted_limits_as_null() {
        let params = CompletionParams { max_tokens: None, ..CompletionParams::default() };
        let request = ChatCompletionRequest::new(params, vec![ChatMessage::user("hello")]);

        let value = serde_json::to_value(&request).unwrap();
        assert!(value["max_tokens"].is_null());
        assert_eq!(value["temperature"], 0.7);
    }

    #[test]
    fn test_partial_usage_reads_missing_counters_as_zero() {
        let usage: Usage =
            serde_json::from_value(json!({"prompt_tokens": 3, "total_tokens": 3})).unwrap();
        assert_eq!(usage, Usage { prompt_tokens: 3, completion_tokens: 0, total_tokens: 3 });
    }

    #[test]
    fn test_provider_error_body() {
        let raw = json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        });
        let body: ProviderErrorBody = serde_json::from_value(raw).unwrap();
        assert_eq!(body.error.message, "Incorrect API key provided");
        assert_eq!(body.error.kind.as_deref(), Some("invalid_request_error"));
    }
}
