//! Pipedash CLI
//!
//! Command-line interface for the pipedash status service.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pipedash")]
#[command(about = "Pipeline dashboard CLI", long_about = None)]
struct Cli {
    /// Status service URL
    #[arg(long, env = "PIPEDASH_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "PIPEDASH_TIMEOUT", default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipedash_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        service_url: cli.url,
        timeout: Duration::from_secs(cli.timeout),
    };

    handle_command(cli.command, &config).await
}
