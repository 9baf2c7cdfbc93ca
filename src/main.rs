use anyhow::Context;
use bench_logstats::{
    read_source, BenchLogstatsError, IoStat, JsonFormatter, Latency, LogFormat, Qps, RdbStats,
    TextFormatter, TimeSeriesCollection, VmStat,
};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Debug, Parser)]
#[clap(
    name = "bench-logstats",
    version,
    about = "A fast benchmark monitoring-log analysis tool"
)]
struct Arguments {
    /// Directory containing the benchmark monitoring logs
    #[clap(value_name = "LOG_DIR", default_value = ".")]
    log_dir: PathBuf,

    /// iostat capture (defaults to LOG_DIR/iostat)
    #[clap(long, value_name = "FILE")]
    iostat: Option<PathBuf>,

    /// vmstat capture (defaults to LOG_DIR/vmstat)
    #[clap(long, value_name = "FILE")]
    vmstat: Option<PathBuf>,

    /// latency samples (defaults to LOG_DIR/latency)
    #[clap(long, value_name = "FILE")]
    latency: Option<PathBuf>,

    /// queries-per-second samples (defaults to LOG_DIR/qps)
    #[clap(long, value_name = "FILE")]
    qps: Option<PathBuf>,

    /// database engine counter dump (defaults to LOG_DIR/rdbstat)
    #[clap(long, value_name = "FILE")]
    rdbstat: Option<PathBuf>,

    /// Output format for results
    #[clap(long, value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// define the filename for the output; use - to dump to stdout
    #[clap(short = 'o', long, value_name = "outfile")]
    outfile: Option<String>,

    /// extra KEY=VALUE pairs recorded in the summary's meta block
    #[clap(long, value_name = "KEY=VALUE")]
    meta: Vec<String>,

    /// don't print anything to stdout, not even a progress bar
    #[clap(short = 'q', long)]
    quiet: bool,
}

#[derive(Debug, ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Arguments::parse();
    let start_time = Instant::now();

    validate_arguments(&args)?;

    // Initialize progress bar if not in quiet mode
    let progress_bar = if !args.quiet {
        Some(create_progress_bar())
    } else {
        None
    };

    let sources = collect_sources(&args, progress_bar.as_ref());

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Source processing complete");
    }

    if sources.iter().all(|(_, collection)| collection.is_empty()) {
        warn!("No samples were parsed from any source");
        process::exit(1);
    }

    output_results(&args, &sources)?;

    let elapsed = start_time.elapsed();
    if !args.quiet {
        println!("Analysis completed in {:.2}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn validate_arguments(args: &Arguments) -> Result<(), BenchLogstatsError> {
    if !args.log_dir.exists() {
        return Err(BenchLogstatsError::Configuration {
            message: format!("Log directory does not exist: {}", args.log_dir.display()),
            field: Some("log_dir".to_string()),
        });
    }
    if !args.log_dir.is_dir() {
        return Err(BenchLogstatsError::Configuration {
            message: format!(
                "Log directory path is not a directory: {}",
                args.log_dir.display()
            ),
            field: Some("log_dir".to_string()),
        });
    }
    for pair in &args.meta {
        if !pair.contains('=') {
            return Err(BenchLogstatsError::Configuration {
                message: format!("--meta expects KEY=VALUE, got {:?}", pair),
                field: Some("meta".to_string()),
            });
        }
    }
    Ok(())
}

/// Run every source file through its format parser. A missing file leaves
/// that source empty; a malformed file is reported and skipped so the other
/// sources still make it into the report.
fn collect_sources(
    args: &Arguments,
    progress_bar: Option<&ProgressBar>,
) -> Vec<(&'static str, TimeSeriesCollection)> {
    let formats: Vec<(Box<dyn LogFormat>, PathBuf)> = vec![
        (Box::new(IoStat::new()), source_path(args, &args.iostat, "iostat")),
        (Box::new(VmStat::new()), source_path(args, &args.vmstat, "vmstat")),
        (Box::new(Latency::new()), source_path(args, &args.latency, "latency")),
        (Box::new(Qps::new()), source_path(args, &args.qps, "qps")),
        (Box::new(RdbStats::new()), source_path(args, &args.rdbstat, "rdbstat")),
    ];

    let mut sources = Vec::new();
    for (index, (format, path)) in formats.iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.set_message(format!("Processing {}", path.display()));
            pb.set_position(index as u64);
        }

        match read_source(format.as_ref(), path) {
            Ok(collection) => {
                info!(
                    "Parsed {} series from {}",
                    collection.len(),
                    path.display()
                );
                sources.push((format.source(), collection));
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                sources.push((format.source(), TimeSeriesCollection::new()));
            }
        }
    }
    sources
}

fn source_path(args: &Arguments, explicit: &Option<PathBuf>, default_name: &str) -> PathBuf {
    explicit
        .clone()
        .unwrap_or_else(|| args.log_dir.join(default_name))
}

fn build_meta(args: &Arguments) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        "generator".to_string(),
        json!(format!("bench-logstats {}", env!("CARGO_PKG_VERSION"))),
    );
    for pair in &args.meta {
        // validate_arguments already rejected pairs without a '='
        if let Some((key, value)) = pair.split_once('=') {
            map.insert(key.to_string(), json!(value));
        }
    }
    Value::Object(map)
}

fn output_results(
    args: &Arguments,
    sources: &[(&'static str, TimeSeriesCollection)],
) -> anyhow::Result<()> {
    let source_refs: Vec<(&str, &TimeSeriesCollection)> = sources
        .iter()
        .map(|(source, collection)| (*source, collection))
        .collect();

    let output = match args.output_format {
        OutputFormat::Json => {
            let formatter = JsonFormatter::new().with_pretty(true);
            formatter.format(&source_refs, &build_meta(args))?
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new();
            formatter.format_summary(&source_refs)?
        }
    };

    match &args.outfile {
        Some(outfile) if outfile != "-" => {
            fs::write(outfile, output)
                .with_context(|| format!("cannot write results to {}", outfile))?;
            info!("Results written to {}", outfile);
        }
        _ => println!("{}", output),
    }

    Ok(())
}

fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
