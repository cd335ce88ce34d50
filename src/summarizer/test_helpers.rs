//! In-memory fetcher for summarizer tests.

use crate::error::SourceError;
use crate::fetch::{SourceFetcher, SourceStream};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

enum Entry {
    Body(String),
    Chunks { chunks: Vec<String>, broken: bool },
    LoadFailure,
}

/// Serves canned CSV bodies by source id; unknown ids are `NotFound`.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    entries: HashMap<String, Entry>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_source(mut self, id: &str, body: &str) -> Self {
        self.entries.insert(id.to_string(), Entry::Body(body.to_string()));
        self
    }

    /// Serve `chunks` as separate reads of one stream
    pub(crate) fn with_chunked_source(mut self, id: &str, chunks: &[&str]) -> Self {
        self.entries.insert(
            id.to_string(),
            Entry::Chunks {
                chunks: chunks.iter().map(|c| c.to_string()).collect(),
                broken: false,
            },
        );
        self
    }

    /// Serve `chunks`, then fail the stream with a connection reset
    pub(crate) fn with_broken_stream(mut self, id: &str, chunks: &[&str]) -> Self {
        self.entries.insert(
            id.to_string(),
            Entry::Chunks {
                chunks: chunks.iter().map(|c| c.to_string()).collect(),
                broken: true,
            },
        );
        self
    }

    pub(crate) fn with_load_failure(mut self, id: &str) -> Self {
        self.entries.insert(id.to_string(), Entry::LoadFailure);
        self
    }

    pub(crate) fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(id.to_string(), delay);
        self
    }

    /// Source ids fetched so far, in call order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceFetcher for StaticFetcher {
    async fn fetch(&self, source_id: &str) -> Result<SourceStream, SourceError> {
        self.calls.lock().unwrap().push(source_id.to_string());

        if let Some(delay) = self.delays.get(source_id) {
            tokio::time::sleep(*delay).await;
        }

        match self.entries.get(source_id) {
            Some(Entry::Body(body)) => Ok(Box::new(std::io::Cursor::new(body.clone().into_bytes()))),
            Some(Entry::Chunks { chunks, broken }) => {
                let mut items: Vec<std::io::Result<VecDeque<u8>>> = chunks
                    .iter()
                    .map(|c| Ok(VecDeque::from(c.clone().into_bytes())))
                    .collect();
                if *broken {
                    items.push(Err(std::io::Error::new(
                        std::io::ErrorKind::ConnectionReset,
                        "connection reset by peer",
                    )));
                }
                Ok(Box::new(tokio_util::io::StreamReader::new(
                    futures::stream::iter(items),
                )))
            }
            Some(Entry::LoadFailure) => Err(SourceError::LoadFailure(format!(
                "HTTP 500 for '{source_id}'"
            ))),
            None => Err(SourceError::NotFound(source_id.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
