//! Named time-series collections and their set algebra

use crate::analytics::stats;
use crate::patterns::{FieldKind, FieldValue, LinePattern};
use crate::series::TimeSeries;
use crate::{contract_error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Per-series summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub mean: f64,
    pub stdev: f64,
}

// Recognizes the `name[units]` key convention.
fn units_pattern() -> &'static LinePattern {
    static PATTERN: OnceLock<LinePattern> = OnceLock::new();
    PATTERN.get_or_init(|| {
        LinePattern::new(
            r"([A-Za-z_]+)\[([A-Za-z_]+)\]",
            &[("key", FieldKind::Text), ("units", FieldKind::Text)],
        )
        .unwrap()
    })
}

fn split_units(name: &str) -> (String, String) {
    match units_pattern().parse_line(name) {
        Ok(Some(fields)) => {
            let key = match fields.get("key") {
                Some(FieldValue::Text(key)) => key.clone(),
                _ => name.to_string(),
            };
            let units = match fields.get("units") {
                Some(FieldValue::Text(units)) => units.clone(),
                _ => String::new(),
            };
            (key, units)
        }
        _ => (name.to_string(), String::new()),
    }
}

/// A mapping from series name to [`TimeSeries`]. Every key is unique and the
/// collection exclusively owns its series.
///
/// Series names may carry their unit as a `name[units]` suffix; the suffix
/// is stripped from the stored key and recorded on the series instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesCollection {
    data: BTreeMap<String, TimeSeries>,
}

impl TimeSeriesCollection {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|k| k.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&TimeSeries> {
        self.data.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimeSeries)> {
        self.data.iter().map(|(name, series)| (name.as_str(), series))
    }

    /// Look up a series, creating it empty if absent. All parsers append
    /// into series "as they go" through this method rather than
    /// pre-declaring them. A `name[units]` suffix sets the unit of a newly
    /// created series; the units default to empty otherwise.
    pub fn get_or_create(&mut self, name: &str) -> &mut TimeSeries {
        let (key, units) = split_units(name);
        self.data
            .entry(key)
            .or_insert_with(|| TimeSeries::new(units))
    }

    pub fn insert(&mut self, name: impl Into<String>, series: TimeSeries) {
        self.data.insert(name.into(), series);
    }

    /// A new collection limited to the listed keys
    pub fn select(&self, keys: &[&str]) -> Self {
        let data = self
            .data
            .iter()
            .filter(|(name, _)| keys.contains(&name.as_str()))
            .map(|(name, series)| (name.clone(), series.clone()))
            .collect();
        Self { data }
    }

    /// A new collection without the listed keys
    pub fn drop(&self, keys: &[&str]) -> Self {
        let data = self
            .data
            .iter()
            .filter(|(name, _)| !keys.contains(&name.as_str()))
            .map(|(name, series)| (name.clone(), series.clone()))
            .collect();
        Self { data }
    }

    /// A new collection with one series renamed; the old key must exist
    pub fn remap(&self, orig_name: &str, new_name: &str) -> Result<Self> {
        let series = self
            .data
            .get(orig_name)
            .ok_or_else(|| contract_error(format!("remap of unknown series {:?}", orig_name)))?
            .clone();
        let mut copy = self.drop(&[orig_name]);
        copy.data.insert(new_name.to_string(), series);
        Ok(copy)
    }

    /// Combine two collections. Key sets must be disjoint: the same metric
    /// name arriving from two sources is a caller error, never silently
    /// resolved.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        for (name, series) in &other.data {
            if res.data.contains_key(name) {
                return Err(contract_error(format!(
                    "merge would overwrite series {:?}",
                    name
                )));
            }
            res.data.insert(name.clone(), series.clone());
        }
        Ok(res)
    }

    /// Compute a new series, in place, from existing ones. Every argument
    /// key must already exist. Post-passes use this to build composite
    /// metrics and then `drop` the raw inputs that fed them.
    pub fn derive<F>(&mut self, name: &str, arg_keys: &[&str], function: F) -> Result<()>
    where
        F: Fn(&[&TimeSeries]) -> Result<TimeSeries>,
    {
        let mut args = Vec::with_capacity(arg_keys.len());
        for key in arg_keys {
            args.push(self.data.get(*key).ok_or_else(|| {
                contract_error(format!("derive {:?} from unknown series {:?}", name, key))
            })?);
        }
        let series = function(&args)?;
        self.data.insert(name.to_string(), series);
        Ok(())
    }

    /// Mean and standard deviation of every series
    pub fn stats(&self) -> BTreeMap<String, SeriesStats> {
        self.data
            .iter()
            .map(|(name, series)| {
                let values = series.to_f64();
                (
                    name.clone(),
                    SeriesStats {
                        mean: stats::mean(&values),
                        stdev: stats::stdev(&values),
                    },
                )
            })
            .collect()
    }
}
