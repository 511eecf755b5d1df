//! Pipeline API Handlers

use axum::Json;
use pipedash_core::domain::pipeline::PipelineStatusDocument;

use crate::service::status_service;

/// GET /api/pipeline-status
/// Current status of the demo pipeline
pub async fn pipeline_status() -> Json<PipelineStatusDocument> {
    tracing::debug!("Building pipeline status");

    Json(status_service::pipeline_status())
}
