// =============================================================================
// Yahoo Finance Chart API Client — daily close history
// =============================================================================
//
// Wraps GET {base}/{symbol}?range=..&interval=1d against the v8 chart
// endpoint and reduces its envelope to a `PriceSeries` of daily closes.
//
// The endpoint answers errors two ways: a non-success HTTP status, and an
// in-band `chart.error` object (unknown symbols usually arrive as both at
// once). Both paths are handled here so callers only ever see
// `MarketDataError`.
// =============================================================================

use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::MarketDataError;
use crate::types::{PriceBar, PriceSeries};

/// Production chart endpoint.
const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Browser-style agent string; the chart endpoint rejects reqwest's default.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Range covering roughly one year of trading days.
pub const DEFAULT_RANGE: &str = "1y";

// -----------------------------------------------------------------------------
// Wire format
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Vec<Option<f64>>,
}

// -----------------------------------------------------------------------------
// Client
// -----------------------------------------------------------------------------

/// HTTP client for the Yahoo Finance chart API.
#[derive(Debug, Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build reqwest client");

        let base_url = base_url.into();
        debug!(%base_url, "YahooClient initialised");

        Self { base_url, client }
    }

    /// Fetch the daily close history for `symbol` over `range` (e.g. "1y").
    ///
    /// Bars without a usable close (null, non-finite, or non-positive) are
    /// dropped; the returned series holds only real trading days, oldest
    /// first.
    #[instrument(skip(self), name = "yahoo::fetch_daily_history")]
    pub async fn fetch_daily_history(
        &self,
        symbol: &str,
        range: &str,
    ) -> Result<PriceSeries, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::EmptySymbol);
        }

        let url = format!("{}/{}?range={}&interval=1d", self.base_url, symbol, range);
        debug!(symbol, range, "requesting daily history");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let body = match serde_json::from_str::<ChartResponse>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(MarketDataError::Status { status });
            }
            Err(e) => return Err(MarketDataError::Malformed(e.to_string())),
        };

        if let Some(err) = body.chart.error {
            warn!(symbol, code = %err.code, "chart API rejected the request");
            return Err(MarketDataError::Api {
                symbol: symbol.to_string(),
                code: err.code,
                description: err.description,
            });
        }

        let result = body
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::NoData {
                symbol: symbol.to_string(),
            })?;

        let bars = Self::collect_bars(symbol, result)?;
        let count = bars.len();

        let series = PriceSeries::new(bars).ok_or_else(|| MarketDataError::NoData {
            symbol: symbol.to_string(),
        })?;

        debug!(symbol, bars = count, "daily history fetched");
        Ok(series)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Turn a chart result into price bars, dropping unusable entries.
    fn collect_bars(symbol: &str, result: ChartResult) -> Result<Vec<PriceBar>, MarketDataError> {
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::Malformed("chart result carries no quote block".into()))?;

        if result.timestamp.len() != quote.close.len() {
            return Err(MarketDataError::Malformed(format!(
                "timestamp/close length mismatch: {} vs {}",
                result.timestamp.len(),
                quote.close.len()
            )));
        }

        let mut bars = Vec::with_capacity(result.timestamp.len());
        let mut skipped = 0usize;

        for (ts, close) in result.timestamp.into_iter().zip(quote.close) {
            let Some(close) = close else {
                // Null close — session row without a fill.
                skipped += 1;
                continue;
            };
            if !close.is_finite() || close <= 0.0 {
                warn!(symbol, ts, close, "skipping bar with unusable close");
                skipped += 1;
                continue;
            }
            let Some(datetime) = DateTime::from_timestamp(ts, 0) else {
                warn!(symbol, ts, "skipping bar with out-of-range timestamp");
                skipped += 1;
                continue;
            };
            bars.push(PriceBar {
                date: datetime.date_naive(),
                close,
            });
        }

        if skipped > 0 {
            debug!(symbol, skipped, "dropped bars without a usable close");
        }

        Ok(bars)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}
