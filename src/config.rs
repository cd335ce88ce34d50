//! Configuration types for crowdstats

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source fetching configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout for network sources in seconds (default: 600)
    #[serde(default = "default_fetch_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Value of the `Accept` header sent with HTTP requests (default: "text/csv")
    #[serde(default = "default_accept")]
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_fetch_timeout(),
            accept: default_accept(),
        }
    }
}

/// Worker pool sizing
///
/// The pool runs `min(max_workers, ceil(jobs / jobs_per_worker))` workers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Upper bound on concurrent workers (default: 10)
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Average number of sources handled by each worker (default: 2)
    #[serde(default = "default_jobs_per_worker")]
    pub jobs_per_worker: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            jobs_per_worker: default_jobs_per_worker(),
        }
    }
}

/// Main configuration for a [`Summarizer`](crate::Summarizer) run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source fetching settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Worker pool settings
    #[serde(default)]
    pub pool: PoolConfig,
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.pool.max_workers == 0 {
            return Err(Error::Config {
                message: "max_workers must be at least 1".to_string(),
                key: Some("max_workers".to_string()),
            });
        }
        if self.pool.jobs_per_worker == 0 {
            return Err(Error::Config {
                message: "jobs_per_worker must be at least 1".to_string(),
                key: Some("jobs_per_worker".to_string()),
            });
        }
        if self.fetch.timeout.is_zero() {
            return Err(Error::Config {
                message: "fetch timeout must be greater than zero".to_string(),
                key: Some("timeout".to_string()),
            });
        }
        Ok(())
    }
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(10 * 60)
}

fn default_accept() -> String {
    "text/csv".to_string()
}

fn default_max_workers() -> usize {
    10
}

fn default_jobs_per_worker() -> usize {
    2
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
