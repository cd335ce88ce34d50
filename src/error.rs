//! Error types for crowdstats
//!
//! This module provides the error taxonomy for the library:
//! - Per-source errors ([`SourceError`]) that are recovered by the orchestrator
//!   and reported as invalid sources
//! - Field validation errors ([`ValidationError`])
//! - Statistics errors ([`StatsError`])
//! - The crate-level [`Error`] used for conditions that abort a run

use thiserror::Error;

/// Result type alias for crowdstats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for crowdstats
///
/// Anything surfacing as this type aborts the run. Bad input never does: it is
/// downgraded to a [`SourceError`] and listed in the run statistics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "max_workers")
        key: Option<String>,
    },

    /// I/O error (reading the source list, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error outside of a per-source fetch (e.g. client construction)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A statistic could not be computed over the combined population
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Broken internal invariant (lost task result, empty aggregation, ...)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors that invalidate a single source
///
/// The orchestrator never propagates these; the source id is recorded in
/// [`RunStats::invalid_source_ids`](crate::types::RunStats) and the run continues.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source does not exist (HTTP 404, missing file)
    #[error("cannot find data file: {0}")]
    NotFound(String),

    /// Any other transport or status failure
    #[error("cannot load data file: {0}")]
    LoadFailure(String),

    /// Structurally invalid data: column count, unknown column, empty name, non-numeric age
    #[error("invalid data format: {0}")]
    InvalidFormat(String),

    /// Semantically invalid field value
    #[error("invalid data value: {0}")]
    InvalidValue(#[from] ValidationError),
}

impl SourceError {
    /// Machine-readable error code, used in logs and JSON reports
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::NotFound(_) => "not_found",
            SourceError::LoadFailure(_) => "load_failure",
            SourceError::InvalidFormat(_) => "invalid_format",
            SourceError::InvalidValue(_) => "invalid_value",
        }
    }
}

/// Field validation errors for a person record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or too long after trimming
    #[error("name must contain from {min}-{max} characters, got {len}")]
    NameLength {
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
        /// Actual trimmed length
        len: usize,
    },

    /// Name contains characters outside the accepted set
    #[error("name must contain letters, dots, -, ', or space: {0}")]
    NameCharacters(String),

    /// Age outside [0, 200]
    #[error("must be a valid age: {0}")]
    AgeOutOfRange(i64),
}

/// Errors from the median/average calculators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Statistic requested over an empty population
    #[error("no age data")]
    NoData,

    /// A rank query past the end of the population
    #[error("rank {rank} out of total count range {total}")]
    OutOfBounds {
        /// 1-indexed rank that was requested
        rank: u64,
        /// Population size
        total: u64,
    },

    /// Age outside the histogram range
    #[error("invalid age: {0}")]
    AgeOutOfRange(i64),
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_codes_are_distinct() {
        let errors = [
            SourceError::NotFound("a".into()),
            SourceError::LoadFailure("b".into()),
            SourceError::InvalidFormat("c".into()),
            SourceError::InvalidValue(ValidationError::AgeOutOfRange(300)),
        ];

        let codes: Vec<&str> = errors.iter().map(SourceError::code).collect();
        assert_eq!(
            codes,
            vec!["not_found", "load_failure", "invalid_format", "invalid_value"]
        );
    }

    #[test]
    fn validation_error_converts_into_invalid_value() {
        let err: SourceError = ValidationError::NameCharacters("Pi**ke".into()).into();
        assert!(matches!(err, SourceError::InvalidValue(_)));
        assert!(err.to_string().contains("Pi**ke"));
    }

    #[test]
    fn stats_error_display() {
        assert_eq!(StatsError::NoData.to_string(), "no age data");
        assert_eq!(
            StatsError::OutOfBounds { rank: 7, total: 6 }.to_string(),
            "rank 7 out of total count range 6"
        );
    }

    #[test]
    fn stats_error_converts_into_error() {
        let err: Error = StatsError::NoData.into();
        assert!(matches!(err, Error::Stats(StatsError::NoData)));
        assert_eq!(err.to_string(), "statistics error: no age data");
    }

    #[test]
    fn config_error_display_includes_message() {
        let err = Error::Config {
            message: "max_workers must be at least 1".into(),
            key: Some("max_workers".into()),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: max_workers must be at least 1"
        );
    }
}
