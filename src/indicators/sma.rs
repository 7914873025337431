// =============================================================================
// Rolling Mean / Rolling Standard Deviation
// =============================================================================
//
// Windowed statistics over a close series, used directly by the moving-average
// crossover strategy and as the building blocks of the Bollinger Bands.
//
// Every function returns a series aligned 1:1 with the input: position i of
// the output describes the window ending at position i of the input, and
// positions before the window has filled hold `None` rather than a sentinel
// value.

/// Arithmetic mean of the trailing `window` values at each position.
///
/// Output has the same length as `values`. Position `i` holds
/// `Some(mean(values[i+1-window ..= i]))` once `i >= window - 1`.
///
/// # Edge cases
/// - `window == 0` => all `None`
/// - `values.len() < window` => all `None`
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || values.len() < window {
        return vec![None; values.len()];
    }

    let mut result = vec![None; window - 1];
    result.extend(
        values
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );
    result
}

/// Rolling standard deviation of the trailing `window` values at each
/// position, using the **sample** estimator (n - 1 divisor).
///
/// The sample/population choice matters: on the 20-bar Bollinger window the
/// two estimators differ by a factor of sqrt(20/19), enough to move a close
/// in or out of a band. This module commits to the sample estimator; see
/// the `rolling_std_uses_sample_estimator` test.
///
/// # Edge cases
/// - `window < 2` => all `None` (the n - 1 divisor needs two observations)
/// - `values.len() < window` => all `None`
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window < 2 || values.len() < window {
        return vec![None; values.len()];
    }

    let n = window as f64;
    let mut result = vec![None; window - 1];
    result.extend(values.windows(window).map(|w| {
        let mean = w.iter().sum::<f64>() / n;
        let variance = w.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(variance.sqrt())
    }));
    result
}
