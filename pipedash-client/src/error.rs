//! Errors from talking to the status service
//!
//! Every variant ends in the fallback document when the caller uses
//! `status_or_default`; they only matter to callers of `fetch_status`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached, or did not answer in time
    #[error("status service unreachable: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("status service returned {status}: {message}")]
    ApiError {
        status: u16,
        /// Response body, usually the service's JSON error
        message: String,
    },

    /// The body was not the expected document
    #[error("unexpected response: {0}")]
    ParseError(String),
}

impl ClientError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// 4xx answer from the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if (400..500).contains(status))
    }

    /// 5xx answer from the service
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
