// =============================================================================
// Shared types used across the tickerlens signal pipeline
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily bar: trading date plus closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
}

/// A non-empty run of daily bars, ordered ascending by date.
///
/// The constructor enforces both invariants, so downstream code (the signal
/// engine in particular) never has to re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from raw bars, sorting them ascending by date.
    ///
    /// Returns `None` when `bars` is empty — callers must reject empty
    /// fetch results before any signals are computed.
    pub fn new(mut bars: Vec<PriceBar>) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }
        bars.sort_by_key(|b| b.date);
        Some(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar. Always present — the constructor rejects
    /// empty input.
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }

    /// Closing prices in date order, one per bar.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

/// Trade direction derived from an indicator at a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
            Self::Hold => write!(f, "Hold"),
        }
    }
}

/// The four strategies the engine evaluates, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    MovingAverageCrossover,
    Rsi,
    BollingerBands,
    Macd,
}

impl Strategy {
    /// Fixed evaluation and report order.
    pub const ALL: [Strategy; 4] = [
        Strategy::MovingAverageCrossover,
        Strategy::Rsi,
        Strategy::BollingerBands,
        Strategy::Macd,
    ];

    /// Human-readable strategy name used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MovingAverageCrossover => "Moving Average Crossover",
            Self::Rsi => "RSI",
            Self::BollingerBands => "Bollinger Bands",
            Self::Macd => "MACD",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The latest signal for one strategy.
///
/// `reference_price` is the close the signal fired at; it is present iff
/// the direction is Buy or Sell. A Hold carries no price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalClassification {
    pub strategy: Strategy,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<f64>,
}

impl SignalClassification {
    /// Pair a direction with its reference price. Hold signals drop the
    /// price, keeping the iff-invariant in one place.
    pub fn new(strategy: Strategy, direction: Direction, last_close: f64) -> Self {
        let reference_price = match direction {
            Direction::Buy | Direction::Sell => Some(last_close),
            Direction::Hold => None,
        };
        Self {
            strategy,
            direction,
            reference_price,
        }
    }
}

/// Engine output: exactly one classification per strategy, in
/// [`Strategy::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub signals: Vec<SignalClassification>,
}
