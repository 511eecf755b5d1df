//! Health check domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status reported while the service is accepting requests
pub const HEALTHY: &str = "healthy";

/// Liveness report returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started
    pub uptime: f64,
    pub environment: String,
}

impl HealthReport {
    /// Report for a live service
    pub fn healthy(uptime: f64, environment: impl Into<String>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp: Utc::now(),
            uptime,
            environment: environment.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}
