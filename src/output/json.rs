//! JSON summary export for parsed benchmark data

use crate::series::{Sample, TimeSeriesCollection};
use crate::Result;
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct SeriesRecord<'a> {
    data: Vec<(usize, Sample)>,
    unit: &'a str,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    date: String,
    meta: &'a serde_json::Value,
    data: BTreeMap<&'a str, BTreeMap<&'a str, SeriesRecord<'a>>>,
}

/// Renders the summary record consumed by the reporting frontend:
/// `{date, meta, data: {<source>: {<series>: {data: [[tick, value], ...],
/// unit}}}}` with zero-based ticks.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printed output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Format the per-source collections as one summary record
    pub fn format(
        &self,
        sources: &[(&str, &TimeSeriesCollection)],
        meta: &serde_json::Value,
    ) -> Result<String> {
        let mut data = BTreeMap::new();
        for (source, collection) in sources {
            let mut series_map = BTreeMap::new();
            for (name, series) in collection.iter() {
                series_map.insert(
                    name,
                    SeriesRecord {
                        data: series.samples().iter().copied().enumerate().collect(),
                        unit: series.unit(),
                    },
                );
            }
            data.insert(*source, series_map);
        }

        let record = SummaryRecord {
            date: Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
            meta,
            data,
        };

        let output = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
