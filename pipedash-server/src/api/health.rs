//! Health Check API Handler
//!
//! Liveness endpoint for monitoring; independent of any downstream service.

use axum::{Json, extract::State};
use pipedash_core::domain::health::HealthReport;

use crate::service::status_service;
use crate::state::AppState;

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    tracing::debug!("Building health report");

    Json(status_service::health_report(&state))
}
