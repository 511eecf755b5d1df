//! Pipedash Server
//!
//! HTTP status service behind the pipedash dashboard: health check, pipeline
//! status, deployment metrics and the bundled static page.

pub mod api;
pub mod config;
pub mod service;
pub mod state;
