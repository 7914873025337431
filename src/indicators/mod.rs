// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators behind
// the signal engine.  Windowed indicators return series aligned 1:1 with the
// input closes, with `None` at positions where the window has not yet filled,
// so callers are forced to handle warm-up and numerical-edge-case scenarios.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
