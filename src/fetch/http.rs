//! HTTP(S) source fetcher

use super::traits::{SourceFetcher, SourceStream};
use crate::config::FetchConfig;
use crate::error::{Result, SourceError};
use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Fetches sources with an HTTP GET
///
/// Sends the configured `Accept` header (default `text/csv`) and applies the
/// configured request timeout. `404 Not Found` maps to
/// [`SourceError::NotFound`]; every other non-200 status, timeout or
/// connection failure maps to [`SourceError::LoadFailure`].
pub struct HttpFetcher {
    client: reqwest::Client,
    accept: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from the fetch configuration
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("crowdstats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            accept: config.accept.clone(),
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, source_id: &str) -> std::result::Result<SourceStream, SourceError> {
        debug!(url = source_id, "fetching source over HTTP");

        let response = self
            .client
            .get(source_id)
            .header(ACCEPT, self.accept.as_str())
            .send()
            .await
            .map_err(|e| {
                let msg = if e.is_timeout() {
                    format!(
                        "timeout fetching '{}' (exceeded {} seconds)",
                        source_id,
                        self.timeout.as_secs()
                    )
                } else if e.is_connect() {
                    format!("connection failed for '{}': {}", source_id, e)
                } else {
                    format!("failed to fetch '{}': {}", source_id, e)
                };
                SourceError::LoadFailure(msg)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(source_id.to_string()));
        }
        if status != StatusCode::OK {
            return Err(SourceError::LoadFailure(format!(
                "HTTP {} for '{}'",
                status.as_u16(),
                source_id
            )));
        }

        // The client timeout also bounds reading the body
        let body = response.bytes_stream().map_err(std::io::Error::other);
        Ok(Box::new(StreamReader::new(Box::pin(body))))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
