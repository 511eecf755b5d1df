//! Metrics API Handlers

use axum::Json;
use pipedash_core::domain::metrics::DeploymentMetrics;

use crate::service::status_service;

/// GET /api/metrics
/// Descriptive deployment metrics
pub async fn deployment_metrics() -> Json<DeploymentMetrics> {
    tracing::debug!("Building deployment metrics");

    Json(status_service::deployment_metrics())
}
