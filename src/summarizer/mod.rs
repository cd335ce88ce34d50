//! Run orchestration
//!
//! [`Summarizer::run`] takes a list of source ids through the whole pipeline:
//! de-duplication, concurrent fetch and digest on the [`WorkerPool`],
//! classification of per-source failures, tournament aggregation and finally
//! the average and median calculations.

mod task;

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

pub use task::{FetchTask, RunResult};

use crate::aggregate::aggregate;
use crate::config::{Config, PoolConfig};
use crate::dedup::dedupe;
use crate::error::{Error, Result};
use crate::fetch::{RoutingFetcher, SourceFetcher};
use crate::pool::{WorkerPool, worker_count};
use crate::stats::{MedianAge, average_age};
use crate::types::{Digest, RunStats, Summary};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Computes population statistics over a set of sources
pub struct Summarizer {
    fetcher: Arc<dyn SourceFetcher>,
    pool: PoolConfig,
}

impl Summarizer {
    /// Create a summarizer with the default pool sizing
    pub fn new(fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self {
            fetcher,
            pool: PoolConfig::default(),
        }
    }

    /// Create a summarizer that fetches HTTP(S) and local sources
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client cannot be created
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let fetcher = RoutingFetcher::new(&config.fetch)?;
        Ok(Self::new(Arc::new(fetcher)).with_pool_config(config.pool.clone()))
    }

    /// Override the pool sizing
    pub fn with_pool_config(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Load every source and summarize the combined population
    ///
    /// Sources that are missing, unreachable or invalid are listed in
    /// [`RunStats::invalid_source_ids`] and otherwise ignored. A run where no
    /// source has data still succeeds with [`Summary::has_data`] set to false.
    ///
    /// # Errors
    ///
    /// Only broken internal invariants are returned as errors
    /// ([`Error::Internal`], [`Error::Stats`]); bad input never aborts a run.
    pub async fn run<I, S>(&self, source_ids: I) -> Result<(Summary, RunStats)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deduped = dedupe(source_ids);
        let duplicate_count = deduped.duplicates.len();

        let workers = worker_count(deduped.unique.len(), &self.pool);
        let tasks: Vec<FetchTask> = deduped
            .unique
            .into_iter()
            .map(|id| FetchTask::new(id, Arc::clone(&self.fetcher)))
            .collect();

        let start = Instant::now();
        let results = WorkerPool::new(workers).run(tasks).await?;
        let elapsed = start.elapsed();

        let mut invalid_source_ids = Vec::new();
        let mut digests = Vec::new();

        for result in results {
            match result.outcome {
                Ok(digest) if digest.is_empty() => {}
                Ok(digest) => digests.push(digest),
                Err(e) => {
                    warn!(
                        source_id = %result.source_id,
                        code = e.code(),
                        error = %e,
                        "rejected source"
                    );
                    invalid_source_ids.push(result.source_id);
                }
            }
        }

        let summary = summarize(digests)?;
        let stats = RunStats {
            invalid_source_ids,
            duplicate_source_ids: deduped.duplicates,
            duplicate_count,
            worker_count: workers,
            elapsed,
        };

        info!(
            has_data = summary.has_data,
            invalid = stats.invalid_source_ids.len(),
            duplicates = stats.duplicate_count,
            workers = stats.worker_count,
            elapsed_ms = elapsed.as_millis() as u64,
            "run complete"
        );

        Ok((summary, stats))
    }
}

/// Aggregate non-empty digests and compute the summary
///
/// An empty input produces [`Summary::no_data`].
///
/// # Errors
///
/// [`Error::Stats`] if a statistic cannot be computed, which only happens
/// when every digest is empty.
pub fn summarize(digests: Vec<Digest>) -> Result<Summary> {
    if digests.is_empty() {
        return Ok(Summary::no_data());
    }

    let combined = aggregate(digests)
        .ok_or_else(|| Error::Internal("aggregation of non-empty digests was empty".into()))?;

    let median = MedianAge::from_counts(combined.age_counts()).calc()?;
    let average = average_age(combined.age_counts())?;

    let median_person = if median.is_actual {
        let person = combined.representative(median.age as usize).ok_or_else(|| {
            Error::Internal(format!("no representative for median age {}", median.age))
        })?;
        Some(person.to_string())
    } else {
        None
    };

    Ok(Summary {
        has_data: true,
        average_age: average,
        median_age: median.age as f32,
        median_is_actual: median.is_actual,
        median_person,
    })
}
