//! Format-specific parsers for benchmark monitoring logs

pub mod iostat;
pub mod latency;
pub mod qps;
pub mod rdbstats;
pub mod vmstat;

pub use iostat::IoStat;
pub use latency::Latency;
pub use qps::Qps;
pub use rdbstats::RdbStats;
pub use vmstat::VmStat;

use crate::patterns::FieldValue;
use crate::series::{Sample, TimeSeriesCollection};
use crate::{contract_error, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// One fixed benchmark log format.
///
/// `parse` recognizes the format's line grammar and turns raw log lines
/// into named series. `process` is the post-pass that derives composite
/// metrics from the parsed series; formats without one implement it as the
/// identity, so a skipped post-pass is always a visible decision.
pub trait LogFormat {
    /// Short name used to label this format's series in reports
    fn source(&self) -> &'static str;

    /// Parse raw log lines into a collection of named series
    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection>;

    /// Post-pass over the parsed collection
    fn process(&self, data: TimeSeriesCollection) -> Result<TimeSeriesCollection>;
}

/// Read one source file and run it through `parse` and `process`.
///
/// An unreadable file is reported and yields an empty collection, so one
/// missing benchmark input does not prevent reporting on the others. A
/// grammar violation inside a readable file is fatal for that source and
/// returned to the caller.
pub fn read_source(format: &dyn LogFormat, path: &Path) -> Result<TimeSeriesCollection> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Missing file: {} ({}); {} data from it will not be reported",
                path.display(),
                e,
                format.source()
            );
            return Ok(TimeSeriesCollection::new());
        }
    };

    let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    debug!(
        "Read {} lines of {} data from {}",
        lines.len(),
        format.source(),
        path.display()
    );

    let data = format.parse(&lines)?;
    format.process(data)
}

/// Coerce a captured field into a sample. Appending a textual capture to a
/// numeric series is a grammar-declaration bug, not a data problem.
pub(crate) fn numeric_sample(name: &str, value: &FieldValue) -> Result<Sample> {
    match value {
        FieldValue::Int(v) => Ok(Sample::Int(*v)),
        FieldValue::Float(v) => Ok(Sample::Float(*v)),
        FieldValue::Text(_) => Err(contract_error(format!(
            "field {:?} is textual and cannot be appended to a series",
            name
        ))),
    }
}
