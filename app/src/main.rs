// In app/src/main.rs

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pipeline::{Job, JobPaths, RunStatus};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

mod tracing_layer;
use self::tracing_layer::LogFileLayer;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Computes a rolling-mean signal over a price CSV and writes a JSON metrics report."
)]
struct Cli {
    /// Path to the input CSV file.
    #[arg(long)]
    input: PathBuf,

    /// Path to the config file (YAML, or TOML/JSON by extension).
    #[arg(long)]
    config: PathBuf,

    /// Path the JSON metrics report is written to.
    #[arg(long)]
    output: PathBuf,

    /// Path of the log file. Lines are appended.
    #[arg(long)]
    log_file: PathBuf,
}

// --- Main Application Entry Point ---

fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    let paths = JobPaths {
        input: cli.input,
        config: cli.config,
        output: cli.output,
    };
    let mut stdout = std::io::stdout().lock();

    let status = match open_log_file(&cli.log_file) {
        Ok(log_file) => tracing::subscriber::with_default(subscriber(Some(log_file)), || {
            Job::new(paths, started).run(&mut stdout)
        }),
        Err(err) => tracing::subscriber::with_default(subscriber(None), || {
            let message = format!("{err:#}");
            tracing::error!("Error occurred: {}", message);
            pipeline::report::publish_failure(None, &message, &paths.output, &mut stdout);
            RunStatus::Failed
        }),
    };

    ExitCode::from(status.exit_code())
}

/// Builds the per-run subscriber: the log file at INFO, plus warnings and
/// errors on stderr. Stdout is reserved for the report.
fn subscriber(log_file: Option<File>) -> impl tracing::Subscriber + Send + Sync + 'static {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(Targets::new().with_default(tracing::Level::WARN));
    let file = log_file.map(|f| LogFileLayer::new(f).with_filter(LevelFilter::INFO));

    tracing_subscriber::registry().with(console).with(file)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
