// =============================================================================
// Market Data Module
// =============================================================================
//
// Everything that talks to the outside world lives here. The rest of the
// crate consumes a clean `PriceSeries` and never sees HTTP, JSON, or the
// quirks of the upstream chart API.

pub mod yahoo;

// Re-export the client for convenient access (e.g. `use crate::market_data::YahooClient`).
pub use yahoo::{YahooClient, DEFAULT_RANGE};

use thiserror::Error;

/// Everything that can go wrong between a ticker symbol and a usable
/// price series.
///
/// Callers branch on three tiers: the symbol was never there
/// (`EmptySymbol`), the provider answered but had nothing for this symbol
/// (`NoData`, `Api`), or the exchange with the provider itself broke down
/// (`Status`, `Transport`, `Malformed`).
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// The ticker symbol was empty or all whitespace. Detected before any
    /// request is made.
    #[error("no ticker symbol provided")]
    EmptySymbol,

    /// The provider responded but carried no usable bars for this symbol.
    #[error("no price data available for '{symbol}'")]
    NoData { symbol: String },

    /// The provider answered with an explicit error payload, typically an
    /// unknown symbol or an unsupported range.
    #[error("chart API error for '{symbol}' ({code}): {description}")]
    Api {
        symbol: String,
        code: String,
        description: String,
    },

    /// The provider answered with a non-success HTTP status and no parseable
    /// error payload.
    #[error("chart API returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The request never completed: DNS, TLS, connect or read failure, or a
    /// body that was not valid JSON.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response parsed as JSON but violated the chart envelope's shape.
    #[error("malformed chart response: {0}")]
    Malformed(String),
}
