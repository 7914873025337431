// =============================================================================
// Terminal Rendering
// =============================================================================
//
// Turns a signal report or a market-data failure into the text the user
// actually sees. Colors are plain ANSI escapes behind a `color` switch so
// the caller can disable them for pipes and dumb terminals.

use serde::Serialize;

use crate::market_data::MarketDataError;
use crate::types::{Direction, SignalClassification, SignalReport};

const BOLD_BLUE: &str = "\x1b[1;34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Render the four-strategy summary as terminal text.
///
/// One line per strategy: `Buy at 123.45` / `Sell at 123.45` when the latest
/// bar carries a signal, `No recent signal` otherwise.
pub fn render_report(symbol: &str, report: &SignalReport, color: bool) -> String {
    let mut out = String::new();

    if color {
        out.push_str(&format!("{BOLD_BLUE}{symbol} Signals Summary:{RESET}\n"));
    } else {
        out.push_str(&format!("{symbol} Signals Summary:\n"));
    }

    for signal in &report.signals {
        let verdict = match (signal.direction, signal.reference_price) {
            (Direction::Buy, Some(price)) => format!("Buy at {price:.2}"),
            (Direction::Sell, Some(price)) => format!("Sell at {price:.2}"),
            _ => "No recent signal".to_string(),
        };
        let verdict = if color {
            paint(signal.direction, &verdict)
        } else {
            verdict
        };
        out.push_str(&format!("  {} Signal: {verdict}\n", signal.strategy.label()));
    }

    out
}

/// Render the summary as pretty-printed JSON for machine consumers.
pub fn render_json(symbol: &str, report: &SignalReport) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        symbol: &'a str,
        signals: &'a [SignalClassification],
    }

    serde_json::to_string_pretty(&JsonReport {
        symbol,
        signals: &report.signals,
    })
}

/// One user-facing line per failure tier.
pub fn render_error(err: &MarketDataError, color: bool) -> String {
    let message = match err {
        MarketDataError::EmptySymbol => "Please enter a valid stock symbol.".to_string(),
        MarketDataError::NoData { symbol } | MarketDataError::Api { symbol, .. } => {
            format!("Data for {symbol} could not be found. Please try another stock.")
        }
        other => format!("Error fetching data: {other}"),
    };

    if color {
        format!("{RED}{message}{RESET}")
    } else {
        message
    }
}

fn paint(direction: Direction, text: &str) -> String {
    match direction {
        Direction::Buy => format!("{GREEN}{text}{RESET}"),
        Direction::Sell => format!("{RED}{text}{RESET}"),
        Direction::Hold => format!("{YELLOW}{text}{RESET}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strategy;

    fn sample_report() -> SignalReport {
        SignalReport {
            signals: vec![
                SignalClassification::new(Strategy::MovingAverageCrossover, Direction::Buy, 123.456),
                SignalClassification::new(Strategy::Rsi, Direction::Hold, 123.456),
                SignalClassification::new(Strategy::BollingerBands, Direction::Sell, 123.456),
                SignalClassification::new(Strategy::Macd, Direction::Hold, 123.456),
            ],
        }
    }

    // ---- render_report ---------------------------------------------------

    #[test]
    fn plain_text_layout() {
        let text = render_report("AAPL", &sample_report(), false);
        let expected = "AAPL Signals Summary:\n\
             \x20 Moving Average Crossover Signal: Buy at 123.46\n\
             \x20 RSI Signal: No recent signal\n\
             \x20 Bollinger Bands Signal: Sell at 123.46\n\
             \x20 MACD Signal: No recent signal\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn colored_output_paints_by_direction() {
        let text = render_report("AAPL", &sample_report(), true);
        assert!(text.starts_with(BOLD_BLUE));
        assert!(text.contains(&format!("{GREEN}Buy at 123.46{RESET}")));
        assert!(text.contains(&format!("{RED}Sell at 123.46{RESET}")));
        assert!(text.contains(&format!("{YELLOW}No recent signal{RESET}")));
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let text = render_report("AAPL", &sample_report(), false);
        assert!(!text.contains('\x1b'));
    }

    // ---- render_json -----------------------------------------------------

    #[test]
    fn json_shape() {
        let json = render_json("AAPL", &sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["symbol"], "AAPL");
        let signals = value["signals"].as_array().unwrap();
        assert_eq!(signals.len(), 4);
        assert_eq!(signals[0]["direction"], "Buy");
        assert_eq!(signals[0]["reference_price"], 123.456);
        // Hold entries omit the price key entirely.
        assert!(signals[1].get("reference_price").is_none());
    }

    // ---- render_error ----------------------------------------------------

    #[test]
    fn error_messages_per_tier() {
        assert_eq!(
            render_error(&MarketDataError::EmptySymbol, false),
            "Please enter a valid stock symbol."
        );
        assert_eq!(
            render_error(
                &MarketDataError::NoData {
                    symbol: "ZZZZ".into()
                },
                false
            ),
            "Data for ZZZZ could not be found. Please try another stock."
        );
        let api = MarketDataError::Api {
            symbol: "ZZZZ".into(),
            code: "Not Found".into(),
            description: "No data found, symbol may be delisted".into(),
        };
        assert_eq!(
            render_error(&api, false),
            "Data for ZZZZ could not be found. Please try another stock."
        );
        let malformed = MarketDataError::Malformed("bad envelope".into());
        assert!(render_error(&malformed, false).starts_with("Error fetching data:"));
    }

    #[test]
    fn colored_errors_are_red() {
        let text = render_error(&MarketDataError::EmptySymbol, true);
        assert!(text.starts_with(RED));
        assert!(text.ends_with(RESET));
    }
}
