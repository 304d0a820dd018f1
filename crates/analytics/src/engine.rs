// In crates/analytics/src/engine.rs

use crate::types::SignalMetrics;
use core_types::PriceTable;
use rust_decimal::prelude::*;

/// Decimal places kept in the reported signal rate.
pub const RATE_DECIMALS: u32 = 4;

/// The engine responsible for aggregating a transformed table into metrics.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the signal rate over every row, including rows whose rolling
    /// mean is undefined.
    pub fn calculate(&self, table: &PriceTable) -> SignalMetrics {
        let rows_processed = table.len();
        let fired: u64 = table.signals().map(u64::from).sum();

        let signal_rate = if rows_processed > 0 {
            fired as f64 / rows_processed as f64
        } else {
            0.0
        };

        SignalMetrics {
            rows_processed,
            signal_rate: round_rate(signal_rate),
        }
    }
}

/// Rounds half-to-even at `RATE_DECIMALS` places.
///
/// The exact binary value of `value` is rounded, not its shortest decimal
/// rendering, so `1.0 / 160.0` (stored just above 0.00625) becomes 0.0063.
pub fn round_rate(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
