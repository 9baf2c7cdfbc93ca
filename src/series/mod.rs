//! Time-series containers and the collection algebra over them

pub mod collection;
pub mod timeseries;

pub use collection::{SeriesStats, TimeSeriesCollection};
pub use timeseries::{Sample, TimeSeries};
