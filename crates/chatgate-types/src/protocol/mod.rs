//! Protocol definitions for the upstream provider.
//!
//! Only the OpenAI ChatCompletions API is spoken; the gateway forwards to a
//! single provider.

pub mod openai;

pub use openai::{
    AssistantMessage, ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse,
    ChatMessage, ProviderErrorBody, Usage,
};
