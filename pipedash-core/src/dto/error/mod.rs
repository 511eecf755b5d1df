//! Error DTOs

use serde::{Deserialize, Serialize};

/// Body of every non-success response from the status service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short reason phrase (e.g. "Not Found")
    pub error: String,
    /// Human readable detail
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
