//! Ordered sequences of numeric samples tagged with a unit

use serde::Serialize;
use std::ops::Sub;

/// One numeric sample. The integer/float kind follows the declared kind of
/// the log field the sample was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    Int(i64),
    Float(f64),
}

impl Sample {
    /// Widen to f64 for the statistics helpers
    pub fn as_f64(&self) -> f64 {
        match *self {
            Sample::Int(v) => v as f64,
            Sample::Float(v) => v,
        }
    }
}

impl Sub for Sample {
    type Output = Sample;

    /// Int - Int stays Int; any Float operand widens the result to Float
    fn sub(self, rhs: Sample) -> Sample {
        match (self, rhs) {
            (Sample::Int(a), Sample::Int(b)) => Sample::Int(a - b),
            (a, b) => Sample::Float(a.as_f64() - b.as_f64()),
        }
    }
}

/// An ordered sequence of numeric samples plus a unit label (possibly
/// empty). Created empty and appended to during parsing; after a
/// collection's post-pass it is only ever read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    unit: String,
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            samples: Vec::new(),
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Samples widened to f64, for the statistics helpers
    pub fn to_f64(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::as_f64).collect()
    }
}
