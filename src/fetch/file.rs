//! Local filesystem source fetcher

use super::traits::{SourceFetcher, SourceStream};
use crate::config::FetchConfig;
use crate::error::SourceError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tracing::debug;

/// Reads sources from the local filesystem
///
/// Accepts absolute `file://` URLs, the relative form `file://./dir/file.csv`
/// and plain paths. Relative paths resolve against the base directory, which
/// defaults to the process working directory. Any other URL scheme is
/// rejected as a load failure.
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
    timeout: Duration,
}

impl FileFetcher {
    /// Create a fetcher that resolves relative paths against the working directory
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            base_dir: None,
            timeout: config.timeout,
        }
    }

    /// Resolve relative paths against `base_dir` instead of the working directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Map a source id to a filesystem path
    ///
    /// Percent-escapes in `file://` URLs are decoded; plain paths are used as given.
    pub fn resolve(&self, source_id: &str) -> Result<PathBuf, SourceError> {
        let invalid = || SourceError::LoadFailure(format!("invalid file URL: {source_id}"));

        let path = match source_id.split_once("://") {
            None => PathBuf::from(source_id),
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("file") => {
                if rest.starts_with("./") || rest.starts_with("../") {
                    let decoded = urlencoding::decode(rest).map_err(|_| invalid())?;
                    PathBuf::from(decoded.into_owned())
                } else {
                    url::Url::parse(source_id)
                        .ok()
                        .and_then(|u| u.to_file_path().ok())
                        .ok_or_else(invalid)?
                }
            }
            Some((scheme, _)) => {
                return Err(SourceError::LoadFailure(format!(
                    "unsupported source scheme '{scheme}': {source_id}"
                )));
            }
        };

        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        })
    }

    async fn open(path: &Path) -> Result<File, SourceError> {
        let file = File::open(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(path.display().to_string())
            } else {
                SourceError::LoadFailure(format!("cannot open {}: {}", path.display(), e))
            }
        })?;

        let metadata = file.metadata().await.map_err(|e| {
            SourceError::LoadFailure(format!("cannot stat {}: {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(SourceError::LoadFailure(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        Ok(file)
    }
}

#[async_trait]
impl SourceFetcher for FileFetcher {
    async fn fetch(&self, source_id: &str) -> Result<SourceStream, SourceError> {
        let path = self.resolve(source_id)?;
        debug!(path = %path.display(), "opening source file");

        let file = tokio::time::timeout(self.timeout, Self::open(&path))
            .await
            .map_err(|_| {
                SourceError::LoadFailure(format!(
                    "timeout opening {} (exceeded {} seconds)",
                    path.display(),
                    self.timeout.as_secs()
                ))
            })??;

        Ok(Box::new(file))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
