//! Gateway request and response bodies.

mod request;
mod response;

pub use request::{
    ChatRequest, CompletionParams, ConversationRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
pub use response::{CompletionResult, HealthStatus};
