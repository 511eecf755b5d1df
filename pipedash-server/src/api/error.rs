//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pipedash_core::dto::error::ErrorBody;

/// Message sent instead of fault details in production
const REDACTED: &str = "Something went wrong";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    InternalError(String),
}

impl ApiError {
    /// Internal error for a fault, with details hidden when `production` is set
    ///
    /// The detail is always logged.
    pub fn internal(detail: impl Into<String>, production: bool) -> Self {
        let detail = detail.into();
        tracing::error!("Internal error: {}", detail);

        if production {
            ApiError::InternalError(REDACTED.to_string())
        } else {
            ApiError::InternalError(detail)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("Not Found", "The requested resource was not found"),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Internal Server Error", msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Handler for every path no route or static asset matches
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Convert a caught handler panic into a structured 500 response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, production: bool) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(detail, production).into_response()
}
