//! Upstream connection settings, built once at startup.

use std::fmt;

use chatgate_types::ConfigError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1";
/// Matches the request timeout of the official OpenAI SDKs.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: Some(api_key.into()), ..Self::default() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check the credential and base URL, returning the usable credential.
    pub fn validate(&self) -> Result<&str, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::missing(API_KEY_ENV))?;

        let base_url = self.normalized_base_url();
        if base_url.is_empty() {
            return Err(ConfigError::invalid("upstream_url", "must not be empty"));
        }
        let parsed = url::Url::parse(base_url)
            .map_err(|e| ConfigError::invalid("upstream_url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "upstream_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(api_key)
    }

    /// Base URL without surrounding whitespace or trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
