//! Metrics command handler

use anyhow::{Context, Result};
use colored::*;
use pipedash_client::StatusClient;

/// Show the deployment metrics
pub async fn show_metrics(client: &StatusClient) -> Result<()> {
    let metrics = client
        .fetch_metrics()
        .await
        .context("Failed to fetch deployment metrics")?;

    println!("{}", "Deployment Metrics:".bold());
    for (title, value) in metrics.entries() {
        println!("  {:<20} {}", title, value.cyan());
    }

    Ok(())
}
