//! Pipedash HTTP Client
//!
//! A small, type-safe client for the pipedash status service, plus the
//! rendering helpers that put a status document on screen.
//!
//! Fetching never has to fail from the caller's point of view:
//! [`StatusClient::status_or_default`] substitutes a locally built document
//! whenever the live one cannot be obtained.
//!
//! # Example
//!
//! ```no_run
//! use pipedash_client::StatusClient;
//! use pipedash_client::render::{Page, render_dashboard};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = StatusClient::new("http://localhost:3000");
//!     let status = client.status_or_default().await;
//!
//!     let mut page = Page::dashboard();
//!     render_dashboard(&mut page, &status, chrono::Utc::now());
//! }
//! ```

pub mod error;
pub mod render;
mod status;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use pipedash_core::domain::pipeline::PipelineStatusDocument;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Handle on one status service
///
/// Requests are single attempts. Without a timeout configured on the
/// underlying `reqwest::Client`, a hung request never resolves; use
/// [`StatusClient::with_client`] to bound it.
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// Service root, never ending in '/'
    base_url: String,
    client: Client,
}

impl StatusClient {
    /// Client for the service rooted at `base_url`, with no request timeout
    ///
    /// ```
    /// use pipedash_client::StatusClient;
    ///
    /// let client = StatusClient::new("http://localhost:3000/");
    /// assert_eq!(client.base_url(), "http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Client reusing a prepared `reqwest::Client`
    ///
    /// This is how callers bound a status fetch, so a service that accepts
    /// the connection but never answers still ends in the fallback document.
    ///
    /// ```
    /// use pipedash_client::StatusClient;
    /// use std::time::Duration;
    ///
    /// let http_client = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StatusClient::with_client("http://localhost:3000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` below the service root and decode the JSON document
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        Self::decode(response).await
    }

    /// Turn a response into a document
    ///
    /// Non-success responses keep the service's error body as the message.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("not a status service document: {}", e)))
    }
}
