//! Unit tests for the numeric helpers and series transforms

use bench_logstats::analytics::{cull_outliers, difference, differentiate, mean, normalize, stdev};
use bench_logstats::{Sample, TimeSeries};

fn int_series(unit: &str, values: &[i64]) -> TimeSeries {
    let mut series = TimeSeries::new(unit);
    for value in values {
        series.push(Sample::Int(*value));
    }
    series
}

fn float_series(unit: &str, values: &[f64]) -> TimeSeries {
    let mut series = TimeSeries::new(unit);
    for value in values {
        series.push(Sample::Float(*value));
    }
    series
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_stdev() {
        // Sample standard deviation of 2, 4, 4, 4, 5, 5, 7, 9.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((stdev(&values) - 2.138089935299395).abs() < 1e-12);
    }

    #[test]
    fn test_stdev_below_two_samples_is_zero() {
        assert_eq!(stdev(&[]), 0.0);
        assert_eq!(stdev(&[42.0]), 0.0);
    }

    #[test]
    fn test_cull_outliers_drops_far_values() {
        let mut values = vec![10.0; 20];
        values.push(1000.0);

        let culled = cull_outliers(&values, 1.3);
        assert_eq!(culled.len(), 20);
        assert!(culled.iter().all(|v| *v == 10.0));
    }

    #[test]
    fn test_cull_outliers_with_zero_spread_keeps_nothing() {
        // Every value sits exactly on the mean, and the strict inequality
        // against 0 * n_sigma excludes all of them.
        let culled = cull_outliers(&[5.0, 5.0, 5.0], 1.3);
        assert!(culled.is_empty());
    }

    #[test]
    fn test_normalize_scales_by_largest_magnitude() {
        assert_eq!(normalize(&[1.0, -4.0, 2.0]), vec![0.25, -1.0, 0.5]);
    }

    #[test]
    fn test_normalize_of_zeros_is_unchanged() {
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalize(&[]).is_empty());
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn test_differentiate() {
        let series = int_series("ops", &[1, 4, 9, 16]);
        let diff = differentiate(&[&series]).unwrap();

        assert_eq!(
            diff.samples(),
            &[Sample::Int(3), Sample::Int(5), Sample::Int(7)]
        );
        assert_eq!(diff.len(), series.len() - 1);
        assert_eq!(diff.unit(), "ops");
    }

    #[test]
    fn test_differentiate_of_single_sample_is_empty() {
        let series = int_series("", &[42]);
        assert!(differentiate(&[&series]).unwrap().is_empty());
    }

    #[test]
    fn test_differentiate_rejects_wrong_arity() {
        let a = int_series("", &[1]);
        let b = int_series("", &[2]);
        assert!(differentiate(&[&a, &b]).is_err());
        assert!(differentiate(&[]).is_err());
    }

    #[test]
    fn test_difference() {
        let a = int_series("ops", &[10, 20, 30]);
        let b = int_series("ops", &[8, 17, 30]);
        let diff = difference(&[&a, &b]).unwrap();

        assert_eq!(
            diff.samples(),
            &[Sample::Int(2), Sample::Int(3), Sample::Int(0)]
        );
        assert_eq!(diff.unit(), "ops");
    }

    #[test]
    fn test_difference_truncates_to_shorter_input() {
        let a = float_series("", &[5.5, 6.5, 7.5]);
        let b = float_series("", &[5.0, 6.0]);
        assert_eq!(difference(&[&a, &b]).unwrap().len(), 2);
    }

    #[test]
    fn test_difference_of_mismatched_units_is_a_contract_violation() {
        let a = int_series("bytes", &[1]);
        let b = int_series("ms", &[1]);
        assert!(difference(&[&a, &b]).is_err());
    }

    #[test]
    fn test_difference_rejects_wrong_arity() {
        let a = int_series("", &[1]);
        assert!(difference(&[&a]).is_err());
    }

    #[test]
    fn test_difference_widens_mixed_kinds() {
        let a = float_series("", &[5.5]);
        let b = int_series("", &[2]);
        assert_eq!(difference(&[&a, &b]).unwrap().samples(), &[Sample::Float(3.5)]);
    }
}
