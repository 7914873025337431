//! End-to-end pipeline tests: mocked chart endpoint -> fetch -> engine -> render.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tickerlens::engine;
use tickerlens::market_data::YahooClient;
use tickerlens::render;
use tickerlens::types::{Direction, Strategy};

/// Mount a one-year-style payload for `symbol`: one bar per day starting at
/// midnight UTC on 2023-01-02.
async fn mount_chart(server: &MockServer, symbol: &str, closes: &[f64]) {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| 1_672_617_600 + i * 86_400)
        .collect();
    let body = json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/{symbol}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn uptrend_pipeline_end_to_end() {
    // 252 trading days of a steady climb from 100.0 in 0.5 steps.
    let closes: Vec<f64> = (0..252).map(|i| 100.0 + i as f64 * 0.5).collect();

    let server = MockServer::start().await;
    mount_chart(&server, "AAPL", &closes).await;

    let client = YahooClient::with_base_url(server.uri());
    let series = client.fetch_daily_history("AAPL", "1y").await.unwrap();
    assert_eq!(series.len(), 252);

    let report = engine::generate_report(&series);

    // Always four signals, always in the same order.
    let strategies: Vec<Strategy> = report.signals.iter().map(|s| s.strategy).collect();
    assert_eq!(strategies, Strategy::ALL.to_vec());

    // A steady climb: crossover and MACD read Buy, the pegged RSI reads
    // overbought, and the close never escapes its own Bollinger Bands.
    let directions: Vec<Direction> = report.signals.iter().map(|s| s.direction).collect();
    assert_eq!(
        directions,
        vec![
            Direction::Buy,
            Direction::Sell,
            Direction::Hold,
            Direction::Buy
        ]
    );

    // Reference price rides along exactly when there is something to act on.
    let last_close = 100.0 + 251.0 * 0.5;
    for signal in &report.signals {
        match signal.direction {
            Direction::Hold => assert_eq!(signal.reference_price, None),
            _ => assert_eq!(signal.reference_price, Some(last_close)),
        }
    }

    let text = render::render_report("AAPL", &report, false);
    assert!(text.starts_with("AAPL Signals Summary:\n"));
    assert!(text.contains("Moving Average Crossover Signal: Buy at 225.50"));
    assert!(text.contains("RSI Signal: Sell at 225.50"));
    assert!(text.contains("Bollinger Bands Signal: No recent signal"));
    assert!(text.contains("MACD Signal: Buy at 225.50"));
}

#[tokio::test]
async fn flat_market_pipeline_yields_no_signals() {
    let closes = vec![100.0; 252];

    let server = MockServer::start().await;
    mount_chart(&server, "FLAT", &closes).await;

    let client = YahooClient::with_base_url(server.uri());
    let series = client.fetch_daily_history("FLAT", "1y").await.unwrap();
    let report = engine::generate_report(&series);

    for signal in &report.signals {
        assert_eq!(signal.direction, Direction::Hold, "{}", signal.strategy);
        assert_eq!(signal.reference_price, None, "{}", signal.strategy);
    }

    let text = render::render_report("FLAT", &report, false);
    assert_eq!(text.matches("No recent signal").count(), 4);
    assert!(!text.contains(" at "));
}

#[tokio::test]
async fn short_history_still_produces_a_full_report() {
    // A brand-new listing with only two weeks of bars: windowed strategies
    // stay quiet, MACD already has a view.
    let closes: Vec<f64> = (0..10).map(|i| 50.0 + i as f64).collect();

    let server = MockServer::start().await;
    mount_chart(&server, "NEWCO", &closes).await;

    let client = YahooClient::with_base_url(server.uri());
    let series = client.fetch_daily_history("NEWCO", "1y").await.unwrap();
    let report = engine::generate_report(&series);

    assert_eq!(report.signals.len(), 4);
    for signal in &report.signals {
        match signal.strategy {
            Strategy::Macd => assert_eq!(signal.direction, Direction::Buy),
            _ => assert_eq!(signal.direction, Direction::Hold, "{}", signal.strategy),
        }
    }
}
