//! Core domain types
//!
//! This module contains the documents served by the status service and
//! consumed by the client. They are shared between the server (which builds
//! them per request) and the client (which builds the fallback locally).

pub mod health;
pub mod metrics;
pub mod pipeline;
