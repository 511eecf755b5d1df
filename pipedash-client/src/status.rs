//! Status service endpoints

use crate::StatusClient;
use crate::error::Result;
use pipedash_core::domain::health::HealthReport;
use pipedash_core::domain::metrics::DeploymentMetrics;
use pipedash_core::domain::pipeline::PipelineStatusDocument;

impl StatusClient {
    // =============================================================================
    // Pipeline Status
    // =============================================================================

    /// Fetch the live pipeline status document
    ///
    /// # Returns
    /// The parsed document, or the reason it could not be obtained: a
    /// transport failure, a non-success status, or a body that is not a
    /// well-formed status document.
    pub async fn fetch_status(&self) -> Result<PipelineStatusDocument> {
        self.get_json("/api/pipeline-status").await
    }

    /// Fetch the pipeline status, substituting the fallback document on failure
    ///
    /// Never fails. The underlying error is only logged.
    ///
    /// # Example
    /// ```no_run
    /// # use pipedash_client::StatusClient;
    /// # async fn example() {
    /// let client = StatusClient::new("http://localhost:3000");
    /// let status = client.status_or_default().await;
    /// assert_eq!(status.stages.len(), 3);
    /// # }
    /// ```
    pub async fn status_or_default(&self) -> PipelineStatusDocument {
        match self.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Error fetching pipeline status: {}", e);
                PipelineStatusDocument::fallback()
            }
        }
    }

    // =============================================================================
    // Health & Metrics
    // =============================================================================

    /// Call the service health endpoint
    ///
    /// # Returns
    /// The health report, or `None` if the health check failed for any reason
    pub async fn check_health(&self) -> Option<HealthReport> {
        match self.get_json::<HealthReport>("/health").await {
            Ok(report) => {
                tracing::info!(
                    "Health check passed: {} ({})",
                    report.status,
                    report.environment
                );
                Some(report)
            }
            Err(e) => {
                tracing::warn!("Health check error: {}", e);
                None
            }
        }
    }

    /// Fetch the deployment metrics
    pub async fn fetch_metrics(&self) -> Result<DeploymentMetrics> {
        self.get_json("/api/metrics").await
    }
}
