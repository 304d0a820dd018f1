// In crates/analytics/src/types.rs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Version label used when a run fails before its settings were loaded.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Aggregates computed from a transformed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalMetrics {
    pub rows_processed: usize,
    /// Fraction of rows whose signal fired, rounded to 4 decimals.
    pub signal_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SignalRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The report of a successful run. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessReport {
    pub version: String,
    pub rows_processed: usize,
    pub metric: Metric,
    pub value: f64,
    pub latency_ms: u64,
    pub seed: i64,
    pub status: Status,
}

impl SuccessReport {
    pub fn new(version: String, seed: i64, metrics: SignalMetrics, latency_ms: u64) -> Self {
        Self {
            version,
            rows_processed: metrics.rows_processed,
            metric: Metric::SignalRate,
            value: metrics.signal_rate,
            latency_ms,
            seed,
            status: Status::Success,
        }
    }
}

/// The report of a failed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub version: String,
    pub status: Status,
    pub error_message: String,
}

impl ErrorReport {
    /// `version` is whatever had been resolved when the failure happened.
    pub fn new(version: Option<&str>, error_message: impl Into<String>) -> Self {
        Self {
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
            status: Status::Error,
            error_message: error_message.into(),
        }
    }
}

/// The single report a run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsReport {
    Success(SuccessReport),
    Error(ErrorReport),
}

impl MetricsReport {
    pub fn is_success(&self) -> bool {
        matches!(self, MetricsReport::Success(_))
    }

    pub fn version(&self) -> &str {
        match self {
            MetricsReport::Success(r) => &r.version,
            MetricsReport::Error(r) => &r.version,
        }
    }

    /// Pretty-printed JSON with a 4-space indent and a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl From<SuccessReport> for MetricsReport {
    fn from(report: SuccessReport) -> Self {
        MetricsReport::Success(report)
    }
}

impl From<ErrorReport> for MetricsReport {
    fn from(report: ErrorReport) -> Self {
        MetricsReport::Error(report)
    }
}
