//! Utility functions for reading source lists

use crate::error::Result;
use std::path::Path;

/// Parse a source list: one id per line
///
/// Surrounding whitespace is trimmed and blank lines (including trailing
/// ones) are ignored. Order and repeats are preserved.
///
/// # Examples
///
/// ```
/// use crowdstats::utils::parse_source_list;
///
/// let ids = parse_source_list("http://a/1.csv\n\n  file://./2.csv  \n");
/// assert_eq!(ids, vec!["http://a/1.csv", "file://./2.csv"]);
/// ```
#[must_use]
pub fn parse_source_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a source list file
pub fn read_source_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_source_list(&content))
}
