//! Parser for periodic `vmstat` captures

use crate::parsers::{numeric_sample, LogFormat};
use crate::patterns::{FieldKind, LineCursor, LinePattern};
use crate::series::TimeSeriesCollection;
use crate::Result;

const VMSTAT_FIELDS: [&str; 16] = [
    "r", "b", "swpd", "free", "buff", "cache", "si", "so", "bi", "bo", "in", "cs", "us", "sy",
    "id", "wa",
];

/// Recognizes `vmstat` output: a file-header/stats-header pair followed by
/// zero-or-more 16-field integer lines, repeated until the input runs out.
pub struct VmStat {
    file_hdr_line: LinePattern,
    stats_hdr_line: LinePattern,
    stats_line: LinePattern,
}

impl VmStat {
    pub fn new() -> Self {
        let fields: Vec<(&str, FieldKind)> = VMSTAT_FIELDS
            .iter()
            .map(|name| (*name, FieldKind::Int))
            .collect();
        Self {
            file_hdr_line: LinePattern::new(
                "procs -----------memory---------- ---swap-- -----io---- -system-- ----cpu----",
                &[],
            )
            .unwrap(),
            stats_hdr_line: LinePattern::new(
                " r  b   swpd   free   buff  cache   si   so    bi    bo   in   cs us sy id wa",
                &[],
            )
            .unwrap(),
            stats_line: LinePattern::new(&r"\s+(\d+)".repeat(16), &fields).unwrap(),
        }
    }
}

impl LogFormat for VmStat {
    fn source(&self) -> &'static str {
        "vmstat"
    }

    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection> {
        let mut res = TimeSeriesCollection::new();
        let mut cursor = LineCursor::new(lines);

        loop {
            if cursor.until(&self.file_hdr_line)?.is_none() {
                break;
            }
            cursor.take(&self.stats_hdr_line)?;
            for sample in cursor.take_while(&[&self.stats_line])? {
                for (name, value) in &sample {
                    res.get_or_create(name).push(numeric_sample(name, value)?);
                }
            }
        }

        Ok(res)
    }

    fn process(&self, data: TimeSeriesCollection) -> Result<TimeSeriesCollection> {
        Ok(data)
    }
}

impl Default for VmStat {
    fn default() -> Self {
        Self::new()
    }
}
