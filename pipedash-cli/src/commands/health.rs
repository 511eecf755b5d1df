//! Health command handler

use anyhow::{Result, bail};
use colored::*;
use pipedash_client::StatusClient;

/// Check the service health endpoint
///
/// Fails when the service cannot be reached or reports itself unhealthy.
pub async fn check_health(client: &StatusClient) -> Result<()> {
    let Some(report) = client.check_health().await else {
        println!("{}", "✗ Health check failed".red().bold());
        bail!("status service at {} is unreachable", client.base_url());
    };

    if !report.is_healthy() {
        println!("{}", format!("✗ Service reports {}", report.status).red().bold());
        bail!("status service is not healthy");
    }

    println!("{}", "✓ Health check passed".green().bold());
    println!("  Environment: {}", report.environment.cyan());
    println!("  Uptime:      {}", format_uptime(report.uptime));
    println!(
        "  Checked:     {}",
        report
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );

    Ok(())
}

/// Format uptime seconds as e.g. "1h 02m 03s"
fn format_uptime(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
