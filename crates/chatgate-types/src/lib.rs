//! # Chatgate Types
//!
//! Wire types and error definitions for the Chatgate completion gateway.
//!
//! - **`error`** - Typed errors for client input, upstream failures and configuration
//! - **`models`** - Gateway request/response bodies (ChatRequest, CompletionResult, ...)
//! - **`protocol`** - OpenAI ChatCompletions wire types sent to and read from the upstream
//!
//! ## Architecture Role
//!
//! ```text
//!        chatgate-types (this crate)
//!                │
//!                ▼
//!          chatgate-core
//!                │
//!                ▼
//!         chatgate-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ConfigError, GatewayError, Result};

pub use models::{
    ChatRequest, CompletionParams, CompletionResult, ConversationRequest, HealthStatus,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use protocol::{ChatMessage, Usage};
