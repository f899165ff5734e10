//! Chatgate Server - Headless Daemon
//!
//! A small HTTP server that relays chat completions to an OpenAI-compatible
//! provider:
//! - `GET  /health`            liveness probe
//! - `POST /chat`              single user message
//! - `POST /chat/conversation` full message history
//!
//! Access via: http://localhost:5000

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod cors;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(&cli.upstream_config())?;
    info!(upstream = %state.client().base_url(), "Upstream completion client ready");

    let app = router::build_router(state);
    let listener = server_utils::create_listener(&cli.host, cli.port).await?;

    info!("Chatgate listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
