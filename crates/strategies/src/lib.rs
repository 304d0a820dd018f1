// In crates/strategies/src/lib.rs

use core_types::PriceTable;
pub mod error;
pub mod rolling_mean;
pub mod types;

pub use error::{Error, Result};

/// The universal interface for a signal strategy.
///
/// A strategy reads the `close` column of a validated table and fills in the
/// derived columns of every row in place. It never adds or removes rows.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn apply(&self, table: &mut PriceTable);
}
