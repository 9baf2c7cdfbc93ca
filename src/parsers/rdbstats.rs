//! Parser for database engine counter dumps

use crate::analytics::transforms;
use crate::parsers::{numeric_sample, LogFormat};
use crate::patterns::{FieldKind, FieldValue, LineCursor, LinePattern};
use crate::series::TimeSeriesCollection;
use crate::{parse_error, Result};
use std::collections::BTreeSet;

/// Start/finish counter pairs reduced to backlog series by `process`
const DIFFERENCES: [(&str, &str); 6] = [
    ("io_reads_completed", "io_reads_started"),
    ("io_writes_started", "io_writes_completed"),
    ("transactions_started", "transactions_ready"),
    ("transactions_ready", "transactions_completed"),
    ("bufs_acquired", "bufs_ready"),
    ("bufs_ready", "bufs_released"),
];

/// Recognizes engine counter dumps: runs of `STAT <name> <value>` lines,
/// each run terminated by an `END` marker. Counters come in an integer
/// form (optionally suffixed `(average of N)`) and a float form (suffixed
/// with a parenthesized average count).
///
/// Every sample block must advance all series in lockstep; unequal series
/// lengths at a block boundary mean a partial or corrupted sample and
/// abort the parse before the next block is scanned.
pub struct RdbStats {
    int_line: LinePattern,
    flt_line: LinePattern,
    end_line: LinePattern,
}

impl RdbStats {
    pub fn new() -> Self {
        Self {
            int_line: LinePattern::new(
                r"STAT\s+(\w+)\s+(\d+)(?:\s+\(average of \d+\))?",
                &[("name", FieldKind::Text), ("value", FieldKind::Int)],
            )
            .unwrap(),
            flt_line: LinePattern::new(
                r"STAT\s+(\w+)\s+([\d.]+)\s+\([\d/]+\)",
                &[("name", FieldKind::Text), ("value", FieldKind::Float)],
            )
            .unwrap(),
            end_line: LinePattern::new("END", &[]).unwrap(),
        }
    }
}

impl LogFormat for RdbStats {
    fn source(&self) -> &'static str {
        "rdbstat"
    }

    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection> {
        let mut res = TimeSeriesCollection::new();
        let mut cursor = LineCursor::new(lines);

        loop {
            let block = cursor.take_while(&[&self.int_line, &self.flt_line])?;
            if block.is_empty() {
                break;
            }

            for mut stat in block {
                let name = match stat.remove("name") {
                    Some(FieldValue::Text(name)) => name,
                    _ => {
                        return Err(parse_error(
                            "counter line without a name",
                            Some(cursor.line_number()),
                            None,
                        ))
                    }
                };
                let value = stat.get("value").ok_or_else(|| {
                    parse_error(
                        "counter line without a value",
                        Some(cursor.line_number()),
                        None,
                    )
                })?;
                res.get_or_create(&name).push(numeric_sample(&name, value)?);
            }

            cursor.take(&self.end_line)?;

            let lens: Vec<usize> = res.iter().map(|(_, series)| series.len()).collect();
            if let (Some(max), Some(min)) = (lens.iter().max(), lens.iter().min()) {
                if max != min {
                    return Err(parse_error(
                        "inconsistent series lengths after sample block",
                        Some(cursor.line_number()),
                        None,
                    ));
                }
            }
        }

        Ok(res)
    }

    /// Reduce the paired start/finish counters to six backlog series and
    /// drop the raw counters that fed them.
    fn process(&self, mut data: TimeSeriesCollection) -> Result<TimeSeriesCollection> {
        if data.is_empty() {
            // Nothing was captured for this source; there is nothing to derive.
            return Ok(data);
        }

        let mut raw_keys = BTreeSet::new();
        for (minuend, subtrahend) in DIFFERENCES {
            data.derive(
                &format!("{} - {}", minuend, subtrahend),
                &[minuend, subtrahend],
                transforms::difference,
            )?;
            raw_keys.insert(minuend);
            raw_keys.insert(subtrahend);
        }

        let raw_keys: Vec<&str> = raw_keys.into_iter().collect();
        Ok(data.drop(&raw_keys))
    }
}

impl Default for RdbStats {
    fn default() -> Self {
        Self::new()
    }
}
