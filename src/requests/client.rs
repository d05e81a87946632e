//! Requests REST Client
//!
//! One-shot HTTP client for the requests endpoint. A single GET, no query
//! parameters, no custom headers and no retries.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use super::model::{Request, RequestsEnvelope};
use crate::config::SourceConfig;

/// Anything that can produce the current request list
#[async_trait]
pub trait RequestSource: Send + Sync {
    /// Fetch the full request list
    async fn fetch_requests(&self) -> Result<Vec<Request>, FetchError>;
}

/// Requests endpoint client
pub struct HttpRequestSource {
    client: Client,
    url: String,
}

impl HttpRequestSource {
    /// Create a new client for the configured endpoint
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Endpoint this client reads from
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RequestSource for HttpRequestSource {
    async fn fetch_requests(&self) -> Result<Vec<Request>, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        tracing::info!(url = %self.url, payload = %body, "Fetched requests payload");

        let envelope: RequestsEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::info!(count = envelope.requests.len(), "Fetched requests");
        Ok(envelope.requests)
    }
}

/// Errors that can occur while fetching the request list
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),
}
