// In crates/pipeline/src/lib.rs

pub mod error;
pub mod report;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use analytics::{AnalyticsEngine, MetricsReport, SuccessReport};
use strategies::rolling_mean::RollingMeanSignal;
use strategies::types::RollingMeanSettings;
use strategies::Strategy;
use tracing::{error, info};

pub use error::{Error, ErrorKind, Result};

/// The files a job reads and writes. The log file is owned by the caller.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// Where a job is in its linear lifecycle. A failure at any stage ends the
/// run with an error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ConfigLoaded,
    DataLoaded,
    Validated,
    Transformed,
    Reported,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed,
}

impl RunStatus {
    /// The process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failed => 1,
        }
    }
}

/// A single-shot signal job: config → data → validate → transform → report.
pub struct Job {
    paths: JobPaths,
    /// Wall-clock start of the whole process, used for `latency_ms`.
    started: Instant,
    stage: Stage,
    /// The version resolved so far, stamped on the error report on failure.
    version: Option<String>,
}

impl Job {
    pub fn new(paths: JobPaths, started: Instant) -> Self {
        Self {
            paths,
            started,
            stage: Stage::Start,
            version: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn advance(&mut self, stage: Stage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "Stage transition.");
        self.stage = stage;
    }

    /// Runs every stage up to building the success report. Nothing is written.
    pub fn execute(&mut self) -> Result<SuccessReport> {
        // --- 1. Configuration ---
        let settings = match app_config::load_settings(&self.paths.config) {
            Ok(settings) => settings,
            Err(err) => {
                self.version = err.version().map(str::to_owned);
                return Err(err.into());
            }
        };
        self.version = Some(settings.version.clone());
        info!(
            "Config loaded: seed={}, window={}, version={}",
            settings.seed, settings.window, settings.version
        );
        self.advance(Stage::ConfigLoaded);

        // --- 2. Load & validate ---
        let raw = market_data::read_table(&self.paths.input)?;
        self.advance(Stage::DataLoaded);

        let mut table = market_data::validate(raw)?;
        let rows_processed = table.len();
        info!("Data loaded: {} rows", rows_processed);
        self.advance(Stage::Validated);

        // --- 3. Transform ---
        let strategy = RollingMeanSignal::new(RollingMeanSettings {
            window: settings.window,
        })?;
        strategy.apply(&mut table);
        info!("Rolling mean calculated with window={}", strategy.window());
        info!("Signals generated");
        self.advance(Stage::Transformed);

        // --- 4. Aggregate ---
        let metrics = AnalyticsEngine::new().calculate(&table);
        let latency_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            "Metrics: signal_rate={}, rows_processed={}",
            metrics.signal_rate, metrics.rows_processed
        );

        Ok(SuccessReport::new(settings.version, settings.seed, metrics, latency_ms))
    }

    /// Runs the job end to end and publishes exactly one report.
    ///
    /// This is the only place errors are caught: the first failure is logged,
    /// turned into the error report and mapped to `RunStatus::Failed`.
    pub fn run<W: Write>(mut self, stdout: &mut W) -> RunStatus {
        info!("Job started");

        let result = self.execute().and_then(|success| {
            info!("Job completed successfully in {}ms", success.latency_ms);
            report::publish(&MetricsReport::from(success), &self.paths.output, stdout)
        });

        match result {
            Ok(()) => {
                self.advance(Stage::Reported);
                RunStatus::Success
            }
            Err(err) => {
                let message = err.to_string();
                error!(stage = ?self.stage, kind = ?err.kind(), "Error occurred: {}", message);
                report::publish_failure(self.version(), &message, &self.paths.output, stdout);
                self.advance(Stage::Reported);
                RunStatus::Failed
            }
        }
    }
}
