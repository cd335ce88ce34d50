//! Trait for source fetchers

use crate::error::SourceError;
use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Byte stream of one CSV document
pub type SourceStream = Box<dyn AsyncRead + Send + Unpin>;

/// Turns a source id into a stream over the bytes of a CSV document
///
/// Implementations classify their own failures: a missing source is
/// [`SourceError::NotFound`], anything else is [`SourceError::LoadFailure`].
/// Errors that surface while the stream is being read are I/O errors and are
/// classified by the reader. Each implementation applies its own timeout;
/// callers never cancel a fetch.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Open a source for streaming
    async fn fetch(&self, source_id: &str) -> Result<SourceStream, SourceError>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
