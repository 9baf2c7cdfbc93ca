//! bench-logstats - benchmark monitoring-log analysis tool
//!
//! This library provides tools for parsing the monitoring logs captured
//! during benchmark runs (iostat, vmstat, latency, qps and database engine
//! counter dumps) into named time series, deriving secondary metrics from
//! them, and exporting a summary record.

use thiserror::Error;

pub mod analytics;
pub mod output;
pub mod parsers;
pub mod patterns;
pub mod series;

// Re-export commonly used items
pub use output::{JsonFormatter, TextFormatter};
pub use parsers::{read_source, IoStat, Latency, LogFormat, Qps, RdbStats, VmStat};
pub use patterns::{FieldKind, FieldMap, FieldValue, LineCursor, LinePattern};
pub use series::{Sample, SeriesStats, TimeSeries, TimeSeriesCollection};

/// Errors that can occur while parsing and aggregating benchmark logs
#[derive(Error, Debug)]
pub enum BenchLogstatsError {
    /// A log line or block did not match the declared grammar
    #[error("Parse error: {message}{}", fmt_location(.line_number, .line_content))]
    Parse {
        message: String,
        line_number: Option<usize>,
        line_content: Option<String>,
    },

    /// A pattern declaration could not be compiled
    #[error("Invalid pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    /// A caller broke an API contract (overlapping merge, absent derive key)
    #[error("Contract violation: {message}")]
    Contract { message: String },

    /// Invalid CLI arguments or configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    /// I/O failure while reading a log file or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while serializing the summary record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything that should not happen
    #[error("Unexpected error: {message}")]
    Unexpected {
        message: String,
        context: Option<String>,
    },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, BenchLogstatsError>;

fn fmt_location(line_number: &Option<usize>, line_content: &Option<String>) -> String {
    let mut loc = String::new();
    if let Some(n) = line_number {
        loc.push_str(&format!(" (line {})", n));
    }
    if let Some(l) = line_content {
        loc.push_str(&format!(": {:?}", l));
    }
    loc
}

/// Create a parse error with optional source location information
pub fn parse_error(
    message: impl Into<String>,
    line_number: Option<usize>,
    line_content: Option<&str>,
) -> BenchLogstatsError {
    BenchLogstatsError::Parse {
        message: message.into(),
        line_number,
        line_content: line_content.map(|l| l.to_string()),
    }
}

/// Create a contract violation error
pub fn contract_error(message: impl Into<String>) -> BenchLogstatsError {
    BenchLogstatsError::Contract {
        message: message.into(),
    }
}

/// Create a pattern compilation error
pub fn pattern_error(pattern: &str, message: impl Into<String>) -> BenchLogstatsError {
    BenchLogstatsError::Pattern {
        pattern: pattern.to_string(),
        message: message.into(),
    }
}
