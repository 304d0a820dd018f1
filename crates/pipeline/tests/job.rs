//! End-to-end runs of the signal job against files on disk.

use std::fs;
use std::path::Path;
use std::time::Instant;

use pipeline::{Job, JobPaths, RunStatus, Stage};
use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn file(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.dir.path().join(name), contents).unwrap();
        self
    }

    fn paths(&self) -> JobPaths {
        JobPaths {
            input: self.dir.path().join("data.csv"),
            config: self.dir.path().join("config.yaml"),
            output: self.dir.path().join("metrics.json"),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

const CONFIG: &str = "seed: 42\nwindow: 3\nversion: \"v1\"\n";
const PRICES: &str = "timestamp,Close\n1,1\n2,2\n3,3\n4,4\n5,5\n";

fn run(ws: &Workspace) -> (RunStatus, Value) {
    let paths = ws.paths();
    let mut stdout = Vec::new();
    let status = Job::new(paths.clone(), Instant::now()).run(&mut stdout);
    let written = fs::read(&paths.output).unwrap();
    assert_eq!(written, stdout, "file and stdout must carry identical bytes");
    (status, serde_json::from_slice(&written).unwrap())
}

// ============================================================================
// Success path
// ============================================================================

#[test]
fn computes_signal_rate_for_rising_prices() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG).file("data.csv", PRICES);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Success);
    assert_eq!(status.exit_code(), 0);
    assert_eq!(report["status"], "success");
    assert_eq!(report["version"], "v1");
    assert_eq!(report["rows_processed"], 5);
    assert_eq!(report["metric"], "signal_rate");
    assert_eq!(report["value"], 0.4);
    assert_eq!(report["seed"], 42);
    assert!(report["latency_ms"].is_u64());
}

#[test]
fn window_of_one_yields_zero_rate() {
    let ws = Workspace::new();
    ws.file("config.yaml", "seed: 1\nwindow: 1\nversion: v9\n")
        .file("data.csv", PRICES);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Success);
    assert_eq!(report["value"], 0.0);
}

#[test]
fn repeated_runs_agree() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG).file("data.csv", PRICES);

    let (_, first) = run(&ws);
    let (_, second) = run(&ws);

    for key in ["value", "rows_processed", "version", "seed"] {
        assert_eq!(first[key], second[key], "{key} differs between runs");
    }
}

#[test]
fn execute_walks_every_stage_without_writing() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG).file("data.csv", PRICES);

    let mut job = Job::new(ws.paths(), Instant::now());
    let report = job.execute().unwrap();

    assert_eq!(job.stage(), Stage::Transformed);
    assert_eq!(job.version(), Some("v1"));
    assert_eq!(report.rows_processed, 5);
    assert!(!ws.paths().output.exists());
}

// ============================================================================
// Failure path
// ============================================================================

#[test]
fn missing_config_reports_unknown_version() {
    let ws = Workspace::new();
    ws.file("data.csv", PRICES);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(status.exit_code(), 1);
    assert_eq!(report["status"], "error");
    assert_eq!(report["version"], "unknown");
    assert!(report.get("value").is_none());
}

#[test]
fn missing_input_mentions_the_missing_file() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(report["version"], "v1");
    assert_eq!(report["error_message"], "Input file does not exist.");
}

#[test]
fn header_only_input_is_an_error() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG).file("data.csv", "timestamp,close\n");

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(report["error_message"], "Input CSV file is empty.");
}

#[test]
fn missing_close_column_is_an_error() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG)
        .file("data.csv", "open,high,low\n1,2,0.5\n");

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(
        report["error_message"],
        "Required column 'close' not found in dataset."
    );
}

#[test]
fn config_without_version_keeps_version_unknown() {
    let ws = Workspace::new();
    ws.file("config.yaml", "seed: 1\nwindow: 2\n")
        .file("data.csv", PRICES);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(report["version"], "unknown");
    assert_eq!(report["error_message"], "Missing required config key: 'version'");
}

#[test]
fn invalid_window_reports_the_declared_version() {
    let ws = Workspace::new();
    ws.file("config.yaml", "seed: 1\nwindow: -3\nversion: v7\n")
        .file("data.csv", PRICES);

    let (status, report) = run(&ws);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(report["status"], "error");
    assert_eq!(report["version"], "v7");
    assert_eq!(
        report["error_message"],
        "Invalid window size -3: window must be at least 1"
    );
}

#[test]
fn output_directories_are_created() {
    let ws = Workspace::new();
    ws.file("config.yaml", CONFIG).file("data.csv", PRICES);
    let mut paths = ws.paths();
    paths.output = ws.root().join("reports/today/metrics.json");

    let mut stdout = Vec::new();
    let status = Job::new(paths.clone(), Instant::now()).run(&mut stdout);

    assert_eq!(status, RunStatus::Success);
    assert_eq!(fs::read(&paths.output).unwrap(), stdout);
}
