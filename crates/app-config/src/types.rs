// In crates/app-config/src/types.rs

use serde::Deserialize;

/// The validated job settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seed for any future randomised logic. Carried through to the report.
    pub seed: i64,
    /// The rolling window size, always at least 1.
    pub window: usize,
    /// The version label stamped on every report.
    pub version: String,
}

/// The config file as written on disk. Every key is optional here so that a
/// missing key can be reported by name instead of as a generic parse error.
/// Unknown keys are ignored.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawSettings {
    pub seed: Option<i64>,
    pub window: Option<i64>,
    pub version: Option<String>,
}
