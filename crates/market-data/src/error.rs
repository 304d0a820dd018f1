// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input file does not exist.")]
    NotFound,

    #[error("Input CSV file is empty.")]
    EmptyData,

    #[error("Required column '{0}' not found in dataset.")]
    MissingColumn(&'static str),

    /// A `close` value that is blank or does not parse as a number.
    /// `row` is 1-based and counts data rows only.
    #[error("Column 'close' has a non-numeric value {value:?} at row {row}.")]
    InvalidClose { row: usize, value: String },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
