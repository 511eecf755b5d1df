//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod health;
mod metrics;
mod status;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show pipeline stage status (falls back to defaults when unreachable)
    Status,
    /// Check service liveness
    Health,
    /// Show deployment metrics
    Metrics,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::Status => status::show_status(&client).await,
        Commands::Health => health::check_health(&client).await,
        Commands::Metrics => metrics::show_metrics(&client).await,
    }
}
