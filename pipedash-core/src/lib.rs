//! Pipedash Core
//!
//! Core types shared by the pipedash status service and its clients.
//!
//! This crate contains:
//! - Domain types: the pipeline status document, health report and metrics
//! - DTOs: wire shapes that only exist at the HTTP boundary (error bodies)
//! - Relative time formatting used when displaying execution instants

pub mod domain;
pub mod dto;
pub mod time;
