//! Status command handler
//!
//! Fetches the pipeline status, renders it into a dashboard page and prints
//! the page slots.

use anyhow::Result;
use colored::*;
use pipedash_client::StatusClient;
use pipedash_client::render::{
    LAST_EXECUTION_SLOT, Page, badge_slot, platform_slot, render_dashboard, status_slot,
};
use pipedash_core::domain::pipeline::Stage;

/// Show the pipeline status
pub async fn show_status(client: &StatusClient) -> Result<()> {
    let status = client.status_or_default().await;

    let mut page = Page::dashboard();
    render_dashboard(&mut page, &status, chrono::Utc::now());

    println!(
        "{} {}",
        status.pipeline.bold(),
        format!("({})", status.status).dimmed()
    );
    println!();

    for stage in Stage::ALL {
        print_stage(&page, stage);
    }

    println!();
    println!(
        "  Last execution: {}",
        page.text(LAST_EXECUTION_SLOT).unwrap_or_default().cyan()
    );

    Ok(())
}

/// Print one stage from the rendered page
fn print_stage(page: &Page, stage: Stage) {
    let id = stage.slot_id();
    let status = page.text(&status_slot(id)).unwrap_or_default();
    let platform = page.text(&platform_slot(id)).unwrap_or_default();
    let badge = page.class_name(&badge_slot(id)).unwrap_or_default();

    println!(
        "  {} {:<8} {:<14} {}",
        "▸".cyan(),
        stage.label().bold(),
        colorize_status(status, badge),
        platform.dimmed()
    );
}

/// Colorize a stage status by its badge class
fn colorize_status(status: &str, badge: &str) -> ColoredString {
    let state = badge.strip_prefix("stage-status ").unwrap_or(badge);
    match state {
        "succeeded" | "ready" => status.green(),
        "failed" => status.red(),
        "running" | "in progress" | "pending" => status.yellow(),
        "configured" => status.cyan(),
        _ => status.normal(),
    }
}
