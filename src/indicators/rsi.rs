// =============================================================================
// Relative Strength Index (RSI) — Rolling-Mean Variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Split each delta into a gain (up move) and a loss (down move
//          magnitude), zero for the other side.
// Step 3 — Average gains and losses over a plain rolling window of `period`
//          deltas. No exponential smoothing; each window stands alone.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Thresholds:  RSI > 70 => overbought,  RSI < 30 => oversold.
// =============================================================================

/// Compute the RSI series for the given `closes` and look-back `period`.
///
/// The output is aligned 1:1 with the input. Position `i` holds the RSI of
/// the `period` deltas ending at close `i`, so values appear from index
/// `period` onwards (the first close has no delta).
///
/// # Edge cases
/// - `period == 0` => all `None`
/// - `closes.len() < period + 1` => all `None` (a window needs `period` deltas)
/// - Window with only gains (zero average loss) => exactly 100.0
/// - Window with no movement at all => `None`, there is no strength to measure
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || closes.len() < period + 1 {
        return vec![None; closes.len()];
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let period_f = period as f64;

    // deltas[j] is the move into close j + 1, so the window of `period`
    // deltas ending at delta j describes close j + 1.
    let mut result = vec![None; period];
    result.extend(deltas.windows(period).map(|w| {
        let (sum_gain, sum_loss) = w.iter().fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });
        rsi_from_averages(sum_gain / period_f, sum_loss / period_f)
    }));
    result
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// - If both averages are zero the window never moved; there is no reading.
/// - If average loss is zero (only gains), RSI is exactly 100.0.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
