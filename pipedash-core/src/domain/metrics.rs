//! Deployment metrics domain types

use serde::{Deserialize, Serialize};

/// Descriptive deployment metrics
///
/// Every field is a static label, not a measured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentMetrics {
    pub deployments_today: String,
    pub success_rate: String,
    pub average_build_time: String,
    pub active_containers: String,
    pub cpu_usage: String,
    pub memory_usage: String,
}

impl DeploymentMetrics {
    /// Labels describing the demo deployment
    pub fn current() -> Self {
        Self {
            deployments_today: "Automated".to_string(),
            success_rate: "HA Enabled".to_string(),
            average_build_time: "Optimized".to_string(),
            active_containers: "Auto-Scaled".to_string(),
            cpu_usage: "Monitored".to_string(),
            memory_usage: "Optimized".to_string(),
        }
    }

    /// Display title and value for each metric, in wire order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("Deployments Today", self.deployments_today.as_str()),
            ("Success Rate", self.success_rate.as_str()),
            ("Average Build Time", self.average_build_time.as_str()),
            ("Active Containers", self.active_containers.as_str()),
            ("CPU Usage", self.cpu_usage.as_str()),
            ("Memory Usage", self.memory_usage.as_str()),
        ]
    }
}
