// In crates/core-types/src/types.rs

/// The binary trading signal derived for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// Price is at or below its rolling mean, or the mean is not yet defined.
    #[default]
    Hold,
    /// Price closed above its rolling mean.
    Above,
}

impl Signal {
    /// The numeric value of the signal column (0 or 1).
    pub fn value(self) -> u8 {
        match self {
            Signal::Hold => 0,
            Signal::Above => 1,
        }
    }
}

/// A single row of the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    /// Raw field values, in the same order as `PriceTable::columns`.
    pub fields: Vec<String>,
    /// The parsed `close` price.
    pub close: f64,
    /// Derived column. `None` until the window has filled.
    pub rolling_mean: Option<f64>,
    /// Derived column. `Hold` until a strategy has been applied.
    pub signal: Signal,
}

impl PriceRow {
    pub fn new(fields: Vec<String>, close: f64) -> Self {
        Self {
            fields,
            close,
            rolling_mean: None,
            signal: Signal::Hold,
        }
    }
}

/// An ordered, validated price table with a numeric `close` column.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    /// Normalised (trimmed, lowercased) column names.
    pub columns: Vec<String>,
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the `close` column in row order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.close)
    }

    /// Iterates the `signal` column as 0/1 values.
    pub fn signals(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(|row| row.signal.value())
    }
}
