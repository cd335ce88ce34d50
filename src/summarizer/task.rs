//! Per-source fetch task

use crate::digest::build_digest;
use crate::error::SourceError;
use crate::fetch::SourceFetcher;
use crate::pool::Task;
use crate::types::Digest;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tokio_util::io::SyncIoBridge;
use tracing::debug;

/// Outcome of loading one source
#[derive(Debug)]
pub struct RunResult {
    /// The source id as submitted
    pub source_id: String,
    /// The digest, or why the source was rejected
    pub outcome: Result<Digest, SourceError>,
}

/// Fetches one source and digests it
pub struct FetchTask {
    source_id: String,
    fetcher: Arc<dyn SourceFetcher>,
}

impl FetchTask {
    /// Create a task for `source_id`
    pub fn new(source_id: impl Into<String>, fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self {
            source_id: source_id.into(),
            fetcher,
        }
    }

    async fn load(&self) -> Result<Digest, SourceError> {
        let stream = self.fetcher.fetch(&self.source_id).await?;
        debug!(
            source_id = %self.source_id,
            fetcher = self.fetcher.name(),
            "source opened"
        );

        // CSV decoding is synchronous; rows are pulled from the stream on a blocking thread
        let reader = SyncIoBridge::new(stream);
        spawn_blocking(move || build_digest(reader))
            .await
            .map_err(|e| SourceError::LoadFailure(format!("digest worker failed: {e}")))?
    }
}

#[async_trait]
impl Task for FetchTask {
    type Output = RunResult;

    async fn run(self) -> RunResult {
        let outcome = self.load().await;
        RunResult {
            source_id: self.source_id,
            outcome,
        }
    }
}
