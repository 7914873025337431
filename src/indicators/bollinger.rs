// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (rolling mean), an upper band
// (mean + k*σ), and a lower band (mean - k*σ), where σ is the rolling sample
// standard deviation of the same window.
//
// A close above the upper band suggests the price has stretched too far up,
// a close below the lower band that it has stretched too far down.

use super::sma::{rolling_mean, rolling_std};

/// Bollinger Band series, each aligned 1:1 with the input closes.
///
/// The three vectors are defined at exactly the same positions: `None` until
/// the first full window, band values from index `period - 1` onwards.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Band series for the given closing prices.
///
/// - `middle` = rolling mean over `period` closes
/// - `upper`  = middle + `num_std` * σ
/// - `lower`  = middle - `num_std` * σ
///
/// # Edge cases
/// - `period < 2` => all `None` (the sample σ needs two observations)
/// - `closes.len() < period` => all `None`
/// - Flat window => σ = 0, all three bands collapse onto the mean
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    if period < 2 || closes.len() < period {
        let none = vec![None; closes.len()];
        return BollingerBands {
            middle: none.clone(),
            upper: none.clone(),
            lower: none,
        };
    }

    let middle = rolling_mean(closes, period);
    let std = rolling_std(closes, period);

    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());
    for (m, s) in middle.iter().zip(&std) {
        match (m, s) {
            (Some(m), Some(s)) => {
                upper.push(Some(m + num_std * s));
                lower.push(Some(m - num_std * s));
            }
            _ => {
                upper.push(None);
                lower.push(None);
            }
        }
    }

    BollingerBands {
        middle,
        upper,
        lower,
    }
}
