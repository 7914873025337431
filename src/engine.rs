// =============================================================================
// Signal Engine
// =============================================================================
//
// Turns a daily close series into one Buy/Sell/Hold classification per
// strategy. Each strategy first maps the closes to a direction series aligned
// 1:1 with the input, then the report keeps only the direction at the most
// recent bar, attaching the latest close as reference price whenever that
// direction calls for action.
//
// The engine is pure: no I/O, no clock, no randomness. Feeding it the same
// series twice yields the same report.

use tracing::debug;

use crate::indicators::bollinger::calculate_bollinger;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::sma::rolling_mean;
use crate::types::{Direction, PriceSeries, SignalClassification, SignalReport, Strategy};

/// Fast leg of the moving-average crossover (trading days).
pub const MA_FAST_WINDOW: usize = 50;
/// Slow leg of the moving-average crossover (trading days).
pub const MA_SLOW_WINDOW: usize = 200;

/// RSI look-back in deltas.
pub const RSI_PERIOD: usize = 14;
/// RSI below this reads oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI above this reads overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Bollinger window in trading days.
pub const BOLLINGER_WINDOW: usize = 20;
/// Band half-width in standard deviations.
pub const BOLLINGER_WIDTH: f64 = 2.0;

/// MACD fast EMA span.
pub const MACD_FAST_SPAN: usize = 12;
/// MACD slow EMA span.
pub const MACD_SLOW_SPAN: usize = 26;
/// MACD signal-line EMA span.
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Classify every position by the 50/200 moving-average crossover.
///
/// Buy where the fast mean sits above the slow one, Sell where it sits below,
/// Hold where either mean is still warming up or the two are exactly equal.
pub fn crossover_directions(closes: &[f64]) -> Vec<Direction> {
    let fast = rolling_mean(closes, MA_FAST_WINDOW);
    let slow = rolling_mean(closes, MA_SLOW_WINDOW);

    fast.iter()
        .zip(&slow)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) if f > s => Direction::Buy,
            (Some(f), Some(s)) if f < s => Direction::Sell,
            _ => Direction::Hold,
        })
        .collect()
}

/// Classify every position by the 14-period RSI against the 30/70 thresholds.
///
/// Buy when oversold (RSI < 30), Sell when overbought (RSI > 70), Hold while
/// the indicator is warming up or has no reading.
pub fn rsi_directions(closes: &[f64]) -> Vec<Direction> {
    calculate_rsi(closes, RSI_PERIOD)
        .into_iter()
        .map(|rsi| match rsi {
            Some(v) if v < RSI_OVERSOLD => Direction::Buy,
            Some(v) if v > RSI_OVERBOUGHT => Direction::Sell,
            _ => Direction::Hold,
        })
        .collect()
}

/// Classify every position by where the close sits relative to its 20-period
/// Bollinger Bands.
///
/// Buy below the lower band, Sell above the upper band, Hold in between or
/// while the bands are warming up.
pub fn bollinger_directions(closes: &[f64]) -> Vec<Direction> {
    let bands = calculate_bollinger(closes, BOLLINGER_WINDOW, BOLLINGER_WIDTH);

    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| match (bands.lower[i], bands.upper[i]) {
            (Some(lower), _) if close < lower => Direction::Buy,
            (_, Some(upper)) if close > upper => Direction::Sell,
            _ => Direction::Hold,
        })
        .collect()
}

/// Classify every position by the 12/26/9 MACD line against its signal line.
///
/// Buy while the MACD line is above the signal line, Sell while below, Hold
/// when the two coincide (including the shared zero at the series start).
pub fn macd_directions(closes: &[f64]) -> Vec<Direction> {
    let m = calculate_macd(closes, MACD_FAST_SPAN, MACD_SLOW_SPAN, MACD_SIGNAL_SPAN);

    m.macd
        .iter()
        .zip(&m.signal)
        .map(|(macd, signal)| {
            if macd > signal {
                Direction::Buy
            } else if macd < signal {
                Direction::Sell
            } else {
                Direction::Hold
            }
        })
        .collect()
}

/// Run all four strategies over the series and classify each by its most
/// recent direction.
///
/// The report always carries exactly four signals, in the fixed
/// [`Strategy::ALL`] order, each with the latest close attached as reference
/// price when the direction is Buy or Sell.
pub fn generate_report(series: &PriceSeries) -> SignalReport {
    let closes = series.closes();
    let last_close = series.last().close;

    let signals = Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let directions = match strategy {
                Strategy::MovingAverageCrossover => crossover_directions(&closes),
                Strategy::Rsi => rsi_directions(&closes),
                Strategy::BollingerBands => bollinger_directions(&closes),
                Strategy::Macd => macd_directions(&closes),
            };
            // Direction series are aligned 1:1 with the closes, which are
            // non-empty by construction.
            let direction = directions.last().copied().unwrap_or(Direction::Hold);
            debug!(strategy = %strategy, direction = %direction, "latest signal");
            SignalClassification::new(strategy, direction, last_close)
        })
        .collect();

    SignalReport { signals }
}
