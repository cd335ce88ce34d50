//! Scheme-based fetcher selection

use super::file::FileFetcher;
use super::http::HttpFetcher;
use super::traits::{SourceFetcher, SourceStream};
use crate::config::FetchConfig;
use crate::error::{Result, SourceError};
use async_trait::async_trait;

/// Sends `http://` and `https://` sources to an [`HttpFetcher`] and `file://`
/// URLs and plain paths to a [`FileFetcher`]
///
/// Any other scheme is an unsupported transport and fails with
/// [`SourceError::LoadFailure`] without touching either fetcher.
pub struct RoutingFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl RoutingFetcher {
    /// Create both underlying fetchers from the same configuration
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            file: FileFetcher::new(config),
        })
    }

    /// Replace the file fetcher (e.g. to change its base directory)
    pub fn with_file_fetcher(mut self, file: FileFetcher) -> Self {
        self.file = file;
        self
    }

    fn route(&self, source_id: &str) -> std::result::Result<&dyn SourceFetcher, SourceError> {
        let scheme = source_id
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("http") | Some("https") => Ok(&self.http),
            Some("file") | None => Ok(&self.file),
            Some(other) => Err(SourceError::LoadFailure(format!(
                "unsupported source scheme '{other}': {source_id}"
            ))),
        }
    }
}

#[async_trait]
impl SourceFetcher for RoutingFetcher {
    async fn fetch(&self, source_id: &str) -> std::result::Result<SourceStream, SourceError> {
        self.route(source_id)?.fetch(source_id).await
    }

    fn name(&self) -> &'static str {
        "routing"
    }
}
