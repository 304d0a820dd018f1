// In crates/pipeline/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] app_config::Error),

    #[error(transparent)]
    Data(#[from] market_data::Error),

    #[error(transparent)]
    Strategy(#[from] strategies::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to echo report to stdout: {0}")]
    Stdout(std::io::Error),
}

/// The closed set of failure classes a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed config, or a missing/invalid key.
    Config,
    /// The input path does not exist.
    NotFound,
    /// The input table has no data rows.
    EmptyData,
    /// The `close` column is missing or not numeric.
    Schema,
    /// Anything else, such as I/O failures while reporting.
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            // Only reachable when a window slips past config validation.
            Error::Strategy(_) => ErrorKind::Config,
            Error::Data(err) => match err {
                market_data::Error::NotFound => ErrorKind::NotFound,
                market_data::Error::EmptyData => ErrorKind::EmptyData,
                market_data::Error::MissingColumn(_) | market_data::Error::InvalidClose { .. } => {
                    ErrorKind::Schema
                }
                market_data::Error::Csv(_) => ErrorKind::Other,
            },
            Error::Serialize(_) | Error::Write { .. } | Error::Stdout(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
