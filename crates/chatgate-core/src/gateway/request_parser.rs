// Request parsing and validation for the chat endpoints

use chatgate_types::{ChatRequest, ConversationRequest, GatewayError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const NO_JSON_DATA: &str = "No JSON data provided";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGES_REQUIRED: &str = "Messages array is required";
pub const MESSAGE_FIELDS_REQUIRED: &str = "Each message must have 'role' and 'content' fields";

/// Decode a request body into a non-empty JSON object.
///
/// Absent, blank, malformed, non-object and `{}` bodies are all reported the
/// same way.
pub fn parse_json_object(body: &[u8]) -> Result<Map<String, Value>, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::validation(NO_JSON_DATA));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(GatewayError::validation(NO_JSON_DATA)),
    }
}

pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, GatewayError> {
    let object = parse_json_object(body)?;

    match object.get("message") {
        None | Some(Value::Null) => return Err(GatewayError::validation(MESSAGE_REQUIRED)),
        Some(Value::String(message)) if message.is_empty() => {
            return Err(GatewayError::validation(MESSAGE_REQUIRED))
        },
        _ => {},
    }

    decode(object)
}

pub fn parse_conversation_request(body: &[u8]) -> Result<ConversationRequest, GatewayError> {
    let object = parse_json_object(body)?;

    let messages = match object.get("messages") {
        Some(Value::Array(messages)) if !messages.is_empty() => messages,
        _ => return Err(GatewayError::validation(MESSAGES_REQUIRED)),
    };
    if !messages.iter().all(has_role_and_content) {
        return Err(GatewayError::validation(MESSAGE_FIELDS_REQUIRED));
    }

    decode(object)
}

/// Presence only: values are forwarded untouched, `null` content included.
fn has_role_and_content(message: &Value) -> bool {
    message
        .as_object()
        .is_some_and(|fields| fields.contains_key("role") && fields.contains_key("content"))
}

/// Remaining failures are wrong types on the optional parameters.
fn decode<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, GatewayError> {
    serde_json::from_value(Value::Object(object))
        .map_err(|e| GatewayError::validation(format!("Invalid request: {}", e)))
}
