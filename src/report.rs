//! Rendering of run results

use crate::error::Result;
use crate::types::{RunStats, Summary};
use serde::Serialize;
use std::fmt;

/// Output format for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable console layout
    #[default]
    Text,
    /// Pretty-printed JSON object with `summary` and `stats`
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    stats: &'a RunStats,
}

/// Render a run in the requested format
pub fn render(summary: &Summary, stats: &RunStats, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary, stats)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport { summary, stats })?),
    }
}

/// Render a run as plain text
pub fn render_text(summary: &Summary, stats: &RunStats) -> String {
    TextReport { summary, stats }.to_string()
}

struct TextReport<'a> {
    summary: &'a Summary,
    stats: &'a RunStats,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { summary, stats } = self;

        if summary.has_data {
            writeln!(f, "dataset summary:")?;
            writeln!(f, "  average age: {:.2}", summary.average_age)?;
            writeln!(f, "  median age: {:.2}", summary.median_age)?;
            match (&summary.median_person, summary.median_is_actual) {
                (Some(person), true) => writeln!(f, "  median age person: {person}")?,
                _ => writeln!(f, "  median age person: <no record found>")?,
            }
        } else {
            writeln!(f, "dataset summary not available: data not found")?;
        }

        writeln!(f)?;
        writeln!(f, "dataset read threads: {}", stats.worker_count)?;
        writeln!(f, "dataset read time cost: {:?}", stats.elapsed)?;

        writeln!(f)?;
        writeln!(
            f,
            "rejected data files count: {}",
            stats.invalid_source_ids.len()
        )?;
        for id in &stats.invalid_source_ids {
            writeln!(f, "  - {id}")?;
        }

        writeln!(f)?;
        writeln!(f, "duplicate data files count: {}", stats.duplicate_count)?;
        for id in &stats.duplicate_source_ids {
            writeln!(f, "  - {id}")?;
        }

        Ok(())
    }
}
