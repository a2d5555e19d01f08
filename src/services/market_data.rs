//! Market data provider interface and the fetch step built on it.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::price::PriceSeries;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider error: {code} - {description}")]
    Api { code: String, description: String },

    #[error("failed to parse provider response: {0}")]
    Parse(String),

    #[error("expected one price series, provider returned {count}")]
    MultipleSeries { count: usize },
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `ticker` from `start` (inclusive) to `end` (exclusive).
    ///
    /// An empty series is a valid answer for a range with no trading days.
    async fn get_price_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, MarketDataError>;
}

/// Provider serving a fixed, preloaded series regardless of the range asked.
pub struct StaticMarketDataProvider {
    series: PriceSeries,
}

impl StaticMarketDataProvider {
    pub fn new(series: PriceSeries) -> Self {
        Self { series }
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_price_history(
        &self,
        ticker: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<PriceSeries, MarketDataError> {
        Ok(PriceSeries::new(ticker, self.series.bars().to_vec()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Data(PriceSeries),
    /// No usable data; carries the reason shown to the user.
    Unavailable(String),
}

/// Fetch a price series, folding provider failures and empty results into
/// [`FetchOutcome::Unavailable`].
pub async fn fetch_price_series(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> FetchOutcome {
    match provider.get_price_history(ticker, start, end).await {
        Ok(series) if series.is_empty() => {
            warn!(ticker = %ticker, %start, %end, "No rows returned for range");
            FetchOutcome::Unavailable(format!(
                "No data found for {} in the given date range.",
                ticker
            ))
        }
        Ok(series) => {
            info!(ticker = %ticker, rows = series.len(), "Fetched price history");
            FetchOutcome::Data(series)
        }
        Err(e) => {
            warn!(ticker = %ticker, error = %e, "Price history fetch failed");
            FetchOutcome::Unavailable(format!("Error fetching data for {}: {}", ticker, e))
        }
    }
}
