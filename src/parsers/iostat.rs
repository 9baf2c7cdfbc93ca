//! Parser for periodic `iostat` captures

use crate::parsers::{numeric_sample, LogFormat};
use crate::patterns::{FieldKind, FieldValue, LineCursor, LinePattern};
use crate::series::TimeSeriesCollection;
use crate::{parse_error, Result};

/// Recognizes `iostat` output: one file header, then repeating blocks of
/// {cpu header, one cpu utilization line} followed by {device header,
/// zero-or-more device lines}.
///
/// Cpu metrics land under `cpu_<field>`; each device's metrics land under
/// `dev:<device>_<field>`. The device grammar declares ` Blk_read` and
/// ` Blk_wrtn` twice (per-second rate, then running total); the totals
/// overwrite the rates, matching the tool's column layout.
pub struct IoStat {
    file_hdr_line: LinePattern,
    avg_cpu_hdr_line: LinePattern,
    avg_cpu_line: LinePattern,
    dev_hdr_line: LinePattern,
    dev_line: LinePattern,
}

impl IoStat {
    pub fn new() -> Self {
        Self {
            file_hdr_line: LinePattern::new("Linux.*", &[]).unwrap(),
            avg_cpu_hdr_line: LinePattern::new(
                "avg-cpu:  %user   %nice %system %iowait  %steal   %idle",
                &[],
            )
            .unwrap(),
            avg_cpu_line: LinePattern::new(
                &r"\s+([\d.]+)".repeat(6),
                &[
                    ("user", FieldKind::Float),
                    ("nice", FieldKind::Float),
                    ("system", FieldKind::Float),
                    ("iowait", FieldKind::Float),
                    ("steal", FieldKind::Float),
                    ("idle", FieldKind::Float),
                ],
            )
            .unwrap(),
            dev_hdr_line: LinePattern::new(
                "Device:            tps   Blk_read/s   Blk_wrtn/s   Blk_read   Blk_wrtn",
                &[],
            )
            .unwrap(),
            dev_line: LinePattern::new(
                r"(\w+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+(\d+)\s+(\d+)",
                &[
                    ("device", FieldKind::Text),
                    ("tps", FieldKind::Float),
                    (" Blk_read", FieldKind::Float),
                    (" Blk_wrtn", FieldKind::Float),
                    (" Blk_read", FieldKind::Int),
                    (" Blk_wrtn", FieldKind::Int),
                ],
            )
            .unwrap(),
        }
    }
}

impl LogFormat for IoStat {
    fn source(&self) -> &'static str {
        "iostat"
    }

    fn parse(&self, lines: &[String]) -> Result<TimeSeriesCollection> {
        let mut res = TimeSeriesCollection::new();
        let mut cursor = LineCursor::new(lines);

        if cursor.until(&self.file_hdr_line)?.is_none() {
            return Err(parse_error("missing iostat file header", None, None));
        }

        loop {
            if cursor.until(&self.avg_cpu_hdr_line)?.is_none() {
                break;
            }

            let cpu = cursor.take(&self.avg_cpu_line)?;
            for (name, value) in &cpu {
                res.get_or_create(&format!("cpu_{}", name))
                    .push(numeric_sample(name, value)?);
            }

            if cursor.until(&self.dev_hdr_line)?.is_none() {
                return Err(parse_error(
                    "cpu stats without a device table",
                    Some(cursor.line_number()),
                    None,
                ));
            }

            for mut device in cursor.take_while(&[&self.dev_line])? {
                let dev_name = match device.remove("device") {
                    Some(FieldValue::Text(name)) => name,
                    _ => {
                        return Err(parse_error(
                            "device line without a device name",
                            Some(cursor.line_number()),
                            None,
                        ))
                    }
                };
                for (name, value) in &device {
                    res.get_or_create(&format!("dev:{}_{}", dev_name, name))
                        .push(numeric_sample(name, value)?);
                }
            }
        }

        Ok(res)
    }

    fn process(&self, data: TimeSeriesCollection) -> Result<TimeSeriesCollection> {
        Ok(data)
    }
}

impl Default for IoStat {
    fn default() -> Self {
        Self::new()
    }
}
