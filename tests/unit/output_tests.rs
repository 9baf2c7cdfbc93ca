//! Unit tests for the JSON and text output formatters

use bench_logstats::{JsonFormatter, Sample, TextFormatter, TimeSeriesCollection};
use serde_json::{json, Value};

fn latency_collection() -> TimeSeriesCollection {
    let mut data = TimeSeriesCollection::new();
    let series = data.get_or_create("latency[ms]");
    series.push(Sample::Float(12.5));
    series.push(Sample::Float(13.0));
    data
}

fn counter_collection() -> TimeSeriesCollection {
    let mut data = TimeSeriesCollection::new();
    let series = data.get_or_create("reads");
    series.push(Sample::Int(100));
    series.push(Sample::Int(110));
    data
}

#[cfg(test)]
mod json_formatter_tests {
    use super::*;

    fn format_sample() -> Value {
        let latency = latency_collection();
        let rdbstat = counter_collection();
        let output = JsonFormatter::new()
            .format(
                &[("latency", &latency), ("rdbstat", &rdbstat)],
                &json!({"run": "baseline"}),
            )
            .unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_top_level_record_shape() {
        let record = format_sample();
        assert!(record["date"].is_string());
        assert_eq!(record["meta"]["run"], "baseline");
        assert!(record["data"].is_object());
    }

    #[test]
    fn test_series_are_tick_value_pairs() {
        let record = format_sample();
        let series = &record["data"]["latency"]["latency"];

        assert_eq!(series["unit"], "ms");
        assert_eq!(series["data"], json!([[0, 12.5], [1, 13.0]]));
    }

    #[test]
    fn test_integer_samples_stay_integers() {
        let record = format_sample();
        let series = &record["data"]["rdbstat"]["reads"];

        assert_eq!(series["data"][0][1], json!(100));
        assert!(series["data"][0][1].is_i64());
    }

    #[test]
    fn test_empty_collection_is_an_empty_object() {
        let empty = TimeSeriesCollection::new();
        let output = JsonFormatter::new()
            .format(&[("vmstat", &empty)], &json!({}))
            .unwrap();
        let record: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(record["data"]["vmstat"], json!({}));
    }

    #[test]
    fn test_pretty_printing() {
        let latency = latency_collection();
        let compact = JsonFormatter::new()
            .format(&[("latency", &latency)], &json!({}))
            .unwrap();
        let pretty = JsonFormatter::new()
            .with_pretty(true)
            .format(&[("latency", &latency)], &json!({}))
            .unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }
}

#[cfg(test)]
mod text_formatter_tests {
    use super::*;

    #[test]
    fn test_summary_table() {
        let latency = latency_collection();
        let output = TextFormatter::new()
            .format_summary(&[("latency", &latency)])
            .unwrap();

        assert!(output.contains("Benchmark Log Summary"));
        assert!(output.contains("[latency]"));
        assert!(output.contains("latency"));
        // Mean of 12.5 and 13.0.
        assert!(output.contains("12.750"));
        assert!(output.contains("ms"));
    }

    #[test]
    fn test_empty_source_is_reported_as_such() {
        let empty = TimeSeriesCollection::new();
        let output = TextFormatter::new()
            .format_summary(&[("qps", &empty)])
            .unwrap();

        assert!(output.contains("[qps]"));
        assert!(output.contains("(no samples)"));
    }
}
