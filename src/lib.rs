//! Daily Buy/Sell/Hold signal summary for a stock ticker.
//!
//! The pipeline has three stages: fetch roughly a year of daily closes
//! ([`market_data::YahooClient`]), map them through four classic technical
//! strategies ([`engine::generate_report`]), and keep each strategy's most
//! recent direction with its reference price ([`types::SignalReport`]).
//!
//! The engine stage is pure and synchronous; only the market-data stage
//! touches the network.

pub mod engine;
pub mod indicators;
pub mod market_data;
pub mod render;
pub mod types;
