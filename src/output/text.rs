//! Human-readable text summary of parsed benchmark data

use crate::series::TimeSeriesCollection;
use crate::{BenchLogstatsError, Result};
use std::fmt::Write;

fn fmt_error(e: std::fmt::Error) -> BenchLogstatsError {
    BenchLogstatsError::Unexpected {
        message: e.to_string(),
        context: Some("text formatting".to_string()),
    }
}

/// Text formatter for per-source series summaries
pub struct TextFormatter {}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self {}
    }

    /// Format a table of series name, sample count, mean, stdev and unit
    /// for every source
    pub fn format_summary(&self, sources: &[(&str, &TimeSeriesCollection)]) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Benchmark Log Summary").map_err(fmt_error)?;
        writeln!(output, "=====================").map_err(fmt_error)?;

        for (source, collection) in sources {
            writeln!(output, "\n[{}]", source).map_err(fmt_error)?;
            if collection.is_empty() {
                writeln!(output, "  (no samples)").map_err(fmt_error)?;
                continue;
            }

            let stats = collection.stats();
            writeln!(
                output,
                "  {:<40} {:>8} {:>14} {:>14}  {}",
                "series", "n", "mean", "stdev", "unit"
            )
            .map_err(fmt_error)?;
            for (name, series) in collection.iter() {
                let series_stats = &stats[name];
                writeln!(
                    output,
                    "  {:<40} {:>8} {:>14.3} {:>14.3}  {}",
                    name,
                    series.len(),
                    series_stats.mean,
                    series_stats.stdev,
                    series.unit()
                )
                .map_err(fmt_error)?;
            }
        }

        Ok(output)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
