mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use createcsv_core::{SizeError, format_seconds, group_thousands, parse_size};
use createcsv_generate::output::report::write_report;
use createcsv_generate::{
    DEFAULT_SEED, GenerateOptions, GenerationError, GenerationReport, GenerationSummary,
    RecordGenerator,
};
use logging::{LoggingError, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(
    name = "createcsv",
    version,
    about = "Create CSV files of random integers, bounded by record count or size",
    before_help = concat!("createcsv v", env!("CARGO_PKG_VERSION"))
)]
struct Cli {
    /// Number of records.
    #[arg(short = 'n', long = "num", value_name = "INT", default_value_t = 0)]
    num: u64,
    /// Size. Can be specified in KB, MB, or GB. (ex. 1gb)
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    size: Option<String>,
    /// Number of columns.
    #[arg(
        short = 'c',
        long = "col",
        value_name = "INT",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    col: u32,
    /// Output file path.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<String>,
    /// Seed for the value generator.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn size_str(&self) -> &str {
        self.size.as_deref().unwrap_or_default()
    }

    /// Output path, or `None` when the flags cannot describe a run.
    fn checked_output(&self) -> Option<PathBuf> {
        if self.num == 0 && self.size_str().is_empty() {
            return None;
        }
        self.output
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(output) = cli.checked_output() else {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::from(1);
    };

    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(event = "run_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output: PathBuf) -> Result<(), CliError> {
    init_logging(cli.log_file.as_deref())?;

    let options = GenerateOptions {
        record_threshold: cli.num,
        size_threshold: parse_size(cli.size_str())?,
        columns: cli.col as usize,
        seed: cli.seed,
    };

    let started_at = chrono::Utc::now();
    let timer = Instant::now();

    let summary = RecordGenerator::new(options.clone()).write_file(&output)?;
    let elapsed = timer.elapsed();

    println!("{}", summary_line(elapsed, &summary));

    if let Some(report_path) = cli.report.as_deref() {
        let report = GenerationReport::new(output, started_at, elapsed, options, summary);
        write_report(report_path, &report)?;
        tracing::info!(event = "report_written", path = %report_path.display());
    }

    Ok(())
}

fn summary_line(elapsed: Duration, summary: &GenerationSummary) -> String {
    format!(
        "Created.\nTime(seconds): {} / Number of records: {} / Number of size(byte): {}",
        format_seconds(elapsed),
        group_thousands(summary.records),
        group_thousands(summary.bytes),
    )
}
