//! Application State
//!
//! Immutable, built once at startup and cloned into every handler.

use std::sync::Arc;

use chatgate_core::{CompletionClient, UpstreamConfig};
use chatgate_types::ConfigError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub client: CompletionClient,
}

impl AppState {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_client(CompletionClient::new(config)?))
    }

    pub fn with_client(client: CompletionClient) -> Self {
        Self { inner: Arc::new(AppStateInner { client }) }
    }

    pub fn client(&self) -> &CompletionClient {
        &self.inner.client
    }
}
