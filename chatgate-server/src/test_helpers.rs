//! Test helpers for chatgate-server unit tests.

use axum_test::TestServer;
use chatgate_core::{CompletionClient, UpstreamConfig};
use wiremock::MockServer;

use crate::router::build_router;
use crate::state::AppState;

pub const TEST_API_KEY: &str = "sk-test";

/// `AppState` whose upstream points at `base_url` (e.g. `http://host:port/v1`).
pub fn test_app_state(base_url: &str) -> AppState {
    let config = UpstreamConfig::new(TEST_API_KEY).with_base_url(base_url);
    let client = CompletionClient::new(&config).expect("failed to build test client");
    AppState::with_client(client)
}

/// Full router in front of a mocked upstream.
pub fn test_server(upstream: &MockServer) -> TestServer {
    let state = test_app_state(&format!("{}/v1", upstream.uri()));
    TestServer::new(build_router(state)).expect("failed to start test server")
}

/// Full router in front of an upstream nobody listens on.
pub fn unreachable_upstream_server() -> TestServer {
    let state = test_app_state("http://127.0.0.1:1/v1");
    TestServer::new(build_router(state)).expect("failed to start test server")
}
