//! Parser for per-tick queries-per-second samples

use crate::parsers::{numeric_sample, LogFormat};
use crate::patterns::{FieldKind, LinePattern};
use crate::series::TimeSeriesCollection;
use crate::{contract_error, parse_error, Result};

/// Recognizes one `<tick> <qps>` record per line; no block structure.
pub struct Qps {
    record_line: LinePattern,
}

impl Qps {
    pub fn new() -> Self {
        Self {
            record_line: LinePattern::new(
                r"(\d+)\s+(\d+)",
                &[("tick", FieldKind::Int), ("qps", FieldKind::Float)],
            )
            .unwrap(),
        }
    }
}

impl LogFormat for Qps {
    fn source(&self) -> &'static str {
        "qps"
    }

    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection> {
        let mut res = TimeSeriesCollection::new();
        for (index, line) in lines.iter().enumerate() {
            let fields = self
                .record_line
                .parse_line(line)?
                .ok_or_else(|| parse_error("malformed qps record", Some(index + 1), Some(line)))?;
            let value = fields
                .get("qps")
                .ok_or_else(|| contract_error("qps record without a qps field"))?;
            res.get_or_create("qps").push(numeric_sample("qps", value)?);
        }
        Ok(res)
    }

    fn process(&self, data: TimeSeriesCollection) -> Result<TimeSeriesCollection> {
        Ok(data)
    }
}

impl Default for Qps {
    fn default() -> Self {
        Self::new()
    }
}
