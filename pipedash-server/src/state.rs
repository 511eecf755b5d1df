//! Shared application state

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;

/// State handed to every request handler
///
/// Immutable after startup; cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Time elapsed since the state was created
    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}
