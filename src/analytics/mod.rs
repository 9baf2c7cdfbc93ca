//! Numeric helpers over parsed time-series data

pub mod stats;
pub mod transforms;

pub use stats::{cull_outliers, mean, normalize, stdev};
pub use transforms::{difference, differentiate};
