// In crates/strategies/src/rolling_mean.rs

use crate::types::RollingMeanSettings;
use crate::{Error, Result, Strategy};
use core_types::{PriceTable, Signal};

/// Trailing simple moving average over `closes`.
///
/// Element `i` is the mean of `closes[i + 1 - window..=i]`, summed in window
/// order, and `None` while fewer than `window` observations exist.
pub fn rolling_mean(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut means = vec![None; closes.len()];
    if window == 0 || window > closes.len() {
        return means;
    }

    for (offset, slice) in closes.windows(window).enumerate() {
        means[offset + window - 1] = Some(slice.iter().sum::<f64>() / window as f64);
    }
    means
}

/// Fires when the close is strictly above its rolling mean.
pub fn signal_for(close: f64, mean: Option<f64>) -> Signal {
    match mean {
        Some(mean) if close > mean => Signal::Above,
        _ => Signal::Hold,
    }
}

/// Price-above-rolling-mean strategy.
#[derive(Debug)]
pub struct RollingMeanSignal {
    settings: RollingMeanSettings,
}

impl RollingMeanSignal {
    /// Rejects a zero window. Settings loaded by `app-config` never carry one;
    /// this guards callers that build `RollingMeanSettings` themselves.
    pub fn new(settings: RollingMeanSettings) -> Result<Self> {
        if settings.window == 0 {
            return Err(Error::InvalidParameters(
                "rolling window must be at least 1".to_string(),
            ));
        }
        Ok(Self { settings })
    }

    pub fn window(&self) -> usize {
        self.settings.window
    }
}

impl Strategy for RollingMeanSignal {
    fn name(&self) -> &'static str {
        "RollingMeanSignal"
    }

    fn apply(&self, table: &mut PriceTable) {
        let closes: Vec<f64> = table.closes().collect();
        let means = rolling_mean(&closes, self.settings.window);

        for (row, mean) in table.rows.iter_mut().zip(means) {
            row.rolling_mean = mean;
            row.signal = signal_for(row.close, mean);
        }

        tracing::debug!(
            strategy = self.name(),
            window = self.settings.window,
            rows = table.len(),
            "Derived rolling_mean and signal columns."
        );
    }
}
