mod error;


pub use error::UpstreamError;

use chatgate_types::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use chatgate_types::ConfigError;
use reqwest::Client;

use crate::common::client_builder::build_http_client;
use crate::config::UpstreamConfig;

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// OpenAI ChatCompletions client.
///
/// Built once at startup and shared read-only by every request; holds no
/// per-request state.
pub struct CompletionClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Validate `config` and build the underlying HTTP client.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        let api_key = config.validate()?.to_string();
        let http_client = build_http_client(config.timeout_secs)
            .map_err(|message| ConfigError::ClientBuild { message })?;
        Ok(Self::with_http_client(http_client, config.normalized_base_url(), api_key))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_http_client(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self { http_client, base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one non-streaming completion request. No retries.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError> {
        let resp = self
            .http_client
            .post(build_url(&self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read response body: {}", e));
            return Err(UpstreamError::from_status(status.as_u16(), &body));
        }

        resp.json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}
