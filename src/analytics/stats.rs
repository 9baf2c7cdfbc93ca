//! Summary statistics over sample values

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; 0.0 below two samples
pub fn stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Retain the values within `n_sigma` standard deviations of the mean
pub fn cull_outliers(values: &[f64], n_sigma: f64) -> Vec<f64> {
    let m = mean(values);
    let sigma = stdev(values);
    values
        .iter()
        .copied()
        .filter(|v| (v - m).abs() < n_sigma * sigma)
        .collect()
}

/// Scale values into [-1, 1] by the largest absolute value; values are
/// returned unchanged when that is 0
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let denom = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if denom == 0.0 {
        values.to_vec()
    } else {
        values.iter().map(|v| v / denom).collect()
    }
}
