//! Parser for per-tick latency samples

use crate::parsers::{numeric_sample, LogFormat};
use crate::patterns::{FieldKind, LinePattern};
use crate::series::TimeSeriesCollection;
use crate::{contract_error, parse_error, Result};

/// Recognizes one `<tick> <latency>` record per line; no block structure.
pub struct Latency {
    record_line: LinePattern,
}

impl Latency {
    pub fn new() -> Self {
        Self {
            record_line: LinePattern::new(
                r"(\d+)\s+([\d.]+)",
                &[("tick", FieldKind::Int), ("latency", FieldKind::Float)],
            )
            .unwrap(),
        }
    }
}

impl LogFormat for Latency {
    fn source(&self) -> &'static str {
        "latency"
    }

    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection> {
        let mut res = TimeSeriesCollection::new();
        for (index, line) in lines.iter().enumerate() {
            let fields = self.record_line.parse_line(line)?.ok_or_else(|| {
                parse_error("malformed latency record", Some(index + 1), Some(line))
            })?;
            let value = fields
                .get("latency")
                .ok_or_else(|| contract_error("latency record without a latency field"))?;
            res.get_or_create("latency")
                .push(numeric_sample("latency", value)?);
        }
        Ok(res)
    }

    fn process(&self, data: TimeSeriesCollection) -> Result<TimeSeriesCollection> {
        Ok(data)
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new()
    }
}
