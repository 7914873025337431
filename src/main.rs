// =============================================================================
// tickerlens — Main Entry Point
// =============================================================================
//
// One-shot CLI: fetch a year of daily closes for a ticker, run the four
// signal strategies over them, print the latest signal per strategy, and
// exit non-zero when the data cannot be fetched.
// =============================================================================

use clap::Parser;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tickerlens::engine;
use tickerlens::market_data::{YahooClient, DEFAULT_RANGE};
use tickerlens::render;

/// Daily Buy/Sell/Hold signal summary for a stock ticker.
#[derive(Debug, Parser)]
#[command(name = "tickerlens", version, about)]
struct Args {
    /// Ticker symbol to analyse (e.g. AAPL).
    symbol: String,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors even on a terminal.
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let symbol = args.symbol.trim().to_uppercase();

    // ── 2. Market data client ────────────────────────────────────────────
    // The base URL override exists for tests and proxies.
    let client = match std::env::var("TICKERLENS_BASE_URL") {
        Ok(base) => YahooClient::with_base_url(base),
        Err(_) => YahooClient::new(),
    };

    // ── 3. Fetch, analyse, render ────────────────────────────────────────
    match client.fetch_daily_history(&symbol, DEFAULT_RANGE).await {
        Ok(series) => {
            debug!(symbol = %symbol, bars = series.len(), "history fetched");
            let report = engine::generate_report(&series);

            if args.json {
                println!("{}", render::render_json(&symbol, &report)?);
            } else {
                let color = !args.no_color && std::io::stdout().is_terminal();
                print!("{}", render::render_report(&symbol, &report, color));
            }
            Ok(())
        }
        Err(err) => {
            let color = !args.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", render::render_error(&err, color));
            std::process::exit(1);
        }
    }
}
