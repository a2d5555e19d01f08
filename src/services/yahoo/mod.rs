//! Yahoo Finance chart API provider

pub mod client;
pub mod messages;
pub mod provider;

pub use client::{YahooClient, DEFAULT_BASE_URL};
pub use provider::{normalize_chart, YahooMarketDataProvider};
