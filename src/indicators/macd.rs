// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD tracks the spread between a fast and a slow EMA of the closes:
//
//   macd_t   = EMA_fast(close)_t - EMA_slow(close)_t
//   signal_t = EMA_signal(macd)_t
//
// The MACD line crossing above its signal line is read as bullish momentum,
// crossing below as bearish. Both lines inherit the first-close seeding of
// `calculate_ema`, so they are defined at every position (and both start at
// zero, since the two EMAs share the same seed).

use super::ema::calculate_ema;

/// MACD line and signal line, each aligned 1:1 with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Calculate MACD and signal line series for the given closing prices.
///
/// # Edge cases
/// - any span `== 0` => both series empty
/// - empty input => both series empty
pub fn calculate_macd(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> MacdSeries {
    if fast_span == 0 || slow_span == 0 || signal_span == 0 || closes.is_empty() {
        return MacdSeries {
            macd: Vec::new(),
            signal: Vec::new(),
        };
    }

    let fast = calculate_ema(closes, fast_span);
    let slow = calculate_ema(closes, slow_span);
    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = calculate_ema(&macd, signal_span);

    MacdSeries { macd, signal }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_empty_input() {
        let m = calculate_macd(&[], 12, 26, 9);
        assert!(m.macd.is_empty());
        assert!(m.signal.is_empty());
    }

    #[test]
    fn macd_zero_span() {
        let m = calculate_macd(&[1.0, 2.0, 3.0], 12, 0, 9);
        assert!(m.macd.is_empty());
        assert!(m.signal.is_empty());
    }

    #[test]
    fn macd_alignment_and_zero_start() {
        let closes: Vec<f64> = (1..=40).map(|x| x as f64).collect();
        let m = calculate_macd(&closes, 12, 26, 9);
        assert_eq!(m.macd.len(), 40);
        assert_eq!(m.signal.len(), 40);
        // Both EMAs share the first close as seed, so the spread starts at 0.
        assert!(m.macd[0].abs() < 1e-12);
        assert!(m.signal[0].abs() < 1e-12);
    }

    #[test]
    fn macd_known_values() {
        // fast span 1 => fast EMA equals the closes. slow span 3 => alpha 1/2:
        // slow = [1, 1.5, 2.25]. signal span 1 => signal equals the MACD line.
        let m = calculate_macd(&[1.0, 2.0, 3.0], 1, 3, 1);
        let expected = [0.0, 0.5, 0.75];
        for (i, e) in expected.iter().enumerate() {
            assert!((m.macd[i] - e).abs() < 1e-10, "macd[{i}]");
            assert!((m.signal[i] - e).abs() < 1e-10, "signal[{i}]");
        }
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let m = calculate_macd(&[100.0; 60], 12, 26, 9);
        for (a, b) in m.macd.iter().zip(&m.signal) {
            assert!(a.abs() < 1e-12);
            assert!(b.abs() < 1e-12);
        }
    }

    #[test]
    fn macd_rising_series_turns_bullish() {
        // Fast EMA tracks a rising series more closely than the slow one, so
        // the MACD line climbs and stays above its own smoothed signal.
        let closes: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        let m = calculate_macd(&closes, 12, 26, 9);
        let last = m.macd.len() - 1;
        assert!(m.macd[last] > 0.0);
        assert!(m.macd[last] > m.signal[last]);
    }

    #[test]
    fn macd_falling_series_turns_bearish() {
        let closes: Vec<f64> = (1..=100).rev().map(|x| x as f64).collect();
        let m = calculate_macd(&closes, 12, 26, 9);
        let last = m.macd.len() - 1;
        assert!(m.macd[last] < 0.0);
        assert!(m.macd[last] < m.signal[last]);
    }
}
