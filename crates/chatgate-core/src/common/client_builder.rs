use std::time::Duration;

const MIN_TIMEOUT_SECS: u64 = 5;

/// Build the upstream HTTP client with a request timeout (floored at 5s).
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(MIN_TIMEOUT_SECS)))
        .tcp_nodelay(true)
        .user_agent(concat!("chatgate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}
