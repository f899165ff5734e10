use clap::Parser;

use chatgate_core::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL};
use chatgate_core::UpstreamConfig;

#[derive(Parser)]
#[command(
    name = "chatgate-server",
    about = "Chatgate - chat completion gateway",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, help = "Upstream API credential")]
    pub api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    #[arg(long, env = "CHATGATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "CHATGATE_PORT", default_value = "5000")]
    pub port: u16,

    #[arg(
        long,
        env = "CHATGATE_UPSTREAM_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Upstream request timeout in seconds"
    )]
    pub timeout_secs: u64,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            api_key: self.api_key.clone(),
            base_url: self.upstream_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
