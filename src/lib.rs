//! # crowdstats
//!
//! Age statistics over many CSV person lists, fetched concurrently.
//!
//! Each source is a CSV file with `fname`, `lname` and `age` columns, served
//! over HTTP(S) or read from the local filesystem. Sources are loaded on a
//! bounded worker pool and reduced to fixed-size age histograms
//! ([`Digest`]), so memory use does not grow with population size. Digests
//! are merged pairwise and the combined histogram yields an exact median
//! and a truncated average age.
//!
//! A source that is missing, unreachable or malformed is reported and
//! skipped; it never aborts the run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use crowdstats::{Config, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summarizer = Summarizer::from_config(&Config::default())?;
//!
//!     let (summary, stats) = summarizer
//!         .run([
//!             "https://example.com/people-1.csv",
//!             "file://./people-2.csv",
//!         ])
//!         .await?;
//!
//!     if summary.has_data {
//!         println!("median age: {:.2}", summary.median_age);
//!     }
//!     println!("rejected: {:?}", stats.invalid_source_ids);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Pairwise digest aggregation
pub mod aggregate;
/// Configuration types
pub mod config;
/// Source id de-duplication
pub mod dedup;
/// CSV decoding into age digests
pub mod digest;
/// Error types
pub mod error;
/// Source fetching over HTTP and the local filesystem
pub mod fetch;
/// Bounded worker pool
pub mod pool;
/// Text and JSON rendering of run results
pub mod report;
/// Average and median calculations
pub mod stats;
/// Run orchestration
pub mod summarizer;
/// Core data types
pub mod types;
/// Utility functions
pub mod utils;
/// Person record validation
pub mod validation;

// Re-export commonly used types
pub use config::{Config, FetchConfig, PoolConfig};
pub use error::{Error, Result, SourceError, StatsError, ValidationError};
pub use fetch::{FileFetcher, HttpFetcher, RoutingFetcher, SourceFetcher, SourceStream};
pub use report::ReportFormat;
pub use summarizer::Summarizer;
pub use types::{Digest, Person, RunStats, Summary};
