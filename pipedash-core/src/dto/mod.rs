//! Data Transfer Objects for HTTP communication
//!
//! Shapes that only exist on the wire between the status service and its
//! clients.

pub mod error;
