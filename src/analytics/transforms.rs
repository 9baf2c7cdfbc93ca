//! Series transforms shaped for `TimeSeriesCollection::derive`

use crate::series::TimeSeries;
use crate::{contract_error, Result};

/// Discrete derivative of one series; the result is one sample shorter
/// than its input.
pub fn differentiate(series: &[&TimeSeries]) -> Result<TimeSeries> {
    let [input] = series else {
        return Err(contract_error(format!(
            "differentiate expects exactly one series, got {}",
            series.len()
        )));
    };
    let mut res = TimeSeries::new(input.unit());
    for pair in input.samples().windows(2) {
        res.push(pair[1] - pair[0]);
    }
    Ok(res)
}

/// Pairwise difference of two series (first minus second), truncated to
/// the shorter input. The units must agree; differencing, say, a byte
/// counter against a millisecond counter is a caller error.
pub fn difference(series: &[&TimeSeries]) -> Result<TimeSeries> {
    let [a, b] = series else {
        return Err(contract_error(format!(
            "difference expects exactly two series, got {}",
            series.len()
        )));
    };
    if a.unit() != b.unit() {
        return Err(contract_error(format!(
            "difference of mismatched units {:?} and {:?}",
            a.unit(),
            b.unit()
        )));
    }
    let mut res = TimeSeries::new(a.unit());
    for (x, y) in a.samples().iter().zip(b.samples()) {
        res.push(*x - *y);
    }
    Ok(res)
}
