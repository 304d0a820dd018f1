// In crates/app-config/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Missing required config key: '{0}'")]
    MissingKey(&'static str),

    /// Raised after every key was read, so the version is already known.
    #[error("Invalid window size {window}: window must be at least 1")]
    InvalidWindow { window: i64, version: String },
}

impl Error {
    /// The `version` the file declared, if it was read before the failure.
    pub fn version(&self) -> Option<&str> {
        match self {
            Error::InvalidWindow { version, .. } => Some(version.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
