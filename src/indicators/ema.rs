// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   alpha = 2 / (span + 1)
//   EMA_0 = close_0
//   EMA_t = close_t * alpha + EMA_{t-1} * (1 - alpha)
//
// The series is seeded with the first close, so it is defined at every
// position of the input. Early values lean heavily on the seed and only
// become meaningful once roughly `span` observations have accumulated;
// the MACD accepts that bias in exchange for full-length alignment.
// =============================================================================

/// Compute the EMA series for the given `closes` slice and smoothing `span`.
///
/// Returns a series with the same length as `closes`, one EMA value per
/// close, starting from the first.
///
/// # Edge cases
/// - `span == 0` => empty vec (division by zero guard)
/// - empty input => empty vec
pub fn calculate_ema(closes: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || closes.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span + 1) as f64;

    let mut result = Vec::with_capacity(closes.len());
    let mut prev_ema = closes[0];
    result.push(prev_ema);

    for &close in &closes[1..] {
        let ema = close * alpha + prev_ema * (1.0 - alpha);
        result.push(ema);
        prev_ema = ema;
    }

    result
}
