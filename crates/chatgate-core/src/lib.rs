//! # Chatgate Core
//!
//! Everything between the HTTP layer and the upstream provider.
//!
//! ```text
//! chatgate-core/src/
//! ├── config.rs     # UpstreamConfig (credential, base URL, timeout)
//! ├── common/       # HTTP client builder
//! ├── gateway/      # request parsing, forwarding, response mapping
//! └── upstream/     # OpenAI ChatCompletions client + error classification
//! ```

pub mod common;
pub mod config;
pub mod gateway;
pub mod upstream;

pub use config::UpstreamConfig;
pub use upstream::{CompletionClient, UpstreamError};
