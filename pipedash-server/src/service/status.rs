//! Status Service
//!
//! Every document is built from the current instant; nothing is cached.

use chrono::Utc;
use pipedash_core::domain::health::HealthReport;
use pipedash_core::domain::metrics::DeploymentMetrics;
use pipedash_core::domain::pipeline::PipelineStatusDocument;

use crate::state::AppState;

/// Current pipeline status, stamped with the request instant
pub fn pipeline_status() -> PipelineStatusDocument {
    PipelineStatusDocument::configured(Utc::now())
}

/// Current deployment metrics
pub fn deployment_metrics() -> DeploymentMetrics {
    DeploymentMetrics::current()
}

/// Liveness report for a running service
pub fn health_report(state: &AppState) -> HealthReport {
    HealthReport::healthy(
        state.uptime().as_secs_f64(),
        state.config().environment.clone(),
    )
}
