//! Service Module
//!
//! Builds the documents the API serves.

pub mod status;

// Re-export for convenience
pub use status as status_service;
