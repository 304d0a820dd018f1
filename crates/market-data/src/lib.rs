// In crates/market-data/src/lib.rs

use std::fs::File;
use std::path::Path;

use core_types::{PriceRow, PriceTable};
use csv::ReaderBuilder;

pub mod error;

pub use error::{Error, Result};

/// The column every input table must carry.
pub const CLOSE_COLUMN: &str = "close";

/// A parsed but unvalidated table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Normalised column names.
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// Trims surrounding whitespace and lowercases a header name.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Reads a delimited file with a header row into a [`RawTable`] of strings.
/// [`validate`] is the second step, kept separate so the job can report the
/// two as distinct stages.
///
/// Blank lines are skipped and short records are accepted; a missing `close`
/// field is caught later by [`validate`].
pub fn read_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound);
    }

    let file = File::open(path).map_err(csv::Error::from)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns: Vec<String> = reader.headers()?.iter().map(normalize_column).collect();

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_owned).collect());
    }

    tracing::debug!(
        path = %path.display(),
        columns = columns.len(),
        records = records.len(),
        "Read input table."
    );
    Ok(RawTable { columns, records })
}

/// Checks that the table has rows and a numeric `close` column.
pub fn validate(raw: RawTable) -> Result<PriceTable> {
    if raw.records.is_empty() {
        return Err(Error::EmptyData);
    }

    let close_index = raw
        .columns
        .iter()
        .position(|c| c == CLOSE_COLUMN)
        .ok_or(Error::MissingColumn(CLOSE_COLUMN))?;

    let rows = raw
        .records
        .into_iter()
        .enumerate()
        .map(|(i, fields)| -> Result<PriceRow> {
            let value = fields.get(close_index).map(String::as_str).unwrap_or("");
            let close = parse_close(value).ok_or_else(|| Error::InvalidClose {
                row: i + 1,
                value: value.to_string(),
            })?;
            Ok(PriceRow::new(fields, close))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PriceTable {
        columns: raw.columns,
        rows,
    })
}

/// Reads and validates in one step.
pub fn load_price_table(path: impl AsRef<Path>) -> Result<PriceTable> {
    validate(read_table(path)?)
}

fn parse_close(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
