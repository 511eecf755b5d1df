//! Configuration module
//!
//! Handles CLI configuration: where the status service lives and how long
//! a single request may take.

use std::time::Duration;

use anyhow::{Context, Result};
use pipedash_client::StatusClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the status service
    pub service_url: String,

    /// Upper bound for each request
    pub timeout: Duration,
}

impl Config {
    /// Build a client for the configured service
    pub fn client(&self) -> Result<StatusClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(StatusClient::with_client(&self.service_url, http_client))
    }
}
