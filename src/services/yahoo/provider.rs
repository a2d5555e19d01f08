//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};

use super::client::YahooClient;
use super::messages::{ChartResponse, ChartResult};
use crate::models::price::{PriceBar, PriceSeries};
use crate::services::market_data::{MarketDataError, MarketDataProvider};

pub struct YahooMarketDataProvider {
    client: YahooClient,
}

impl YahooMarketDataProvider {
    pub fn with_client(client: YahooClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_price_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, MarketDataError> {
        let response = self.client.chart(ticker, start, end).await?;
        normalize_chart(ticker, response)
    }
}

/// Flatten the per-field nested columns of a chart response into one
/// [`PriceBar`] per timestamp.
///
/// Only open, high, low, close and adjusted close are kept. Rows with any of
/// those missing are dropped. A response with no result yields an empty
/// series; more than one result is rejected.
pub fn normalize_chart(
    ticker: &str,
    response: ChartResponse,
) -> Result<PriceSeries, MarketDataError> {
    let mut results = response.chart.result.unwrap_or_default();
    let result = match results.len() {
        0 => return Ok(PriceSeries::empty(ticker)),
        1 => results.remove(0),
        count => return Err(MarketDataError::MultipleSeries { count }),
    };

    let bars = flatten_result(ticker, &result)?;
    Ok(PriceSeries::new(ticker, bars))
}

fn flatten_result(ticker: &str, result: &ChartResult) -> Result<Vec<PriceBar>, MarketDataError> {
    if result.timestamp.is_empty() {
        return Ok(Vec::new());
    }

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| MarketDataError::Parse("chart result has no quote columns".to_string()))?;
    let adjclose = result
        .indicators
        .adjclose
        .first()
        .map(|column| column.adjclose.as_slice())
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    let mut dropped = 0usize;

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let date = DateTime::from_timestamp(ts + result.meta.gmtoffset, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| MarketDataError::Parse(format!("invalid timestamp {}", ts)))?;

        let close = cell(&quote.close, i);
        let row = (
            cell(&quote.open, i),
            cell(&quote.high, i),
            cell(&quote.low, i),
            close,
            // Without the adjclose column fall back to the raw close.
            if adjclose.is_empty() { close } else { cell(adjclose, i) },
        );

        match row {
            (Some(open), Some(high), Some(low), Some(close), Some(adjusted_close)) => {
                bars.push(PriceBar::new(date, open, high, low, close, adjusted_close));
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(ticker = %ticker, dropped, "Dropped rows with missing price fields");
    }
    debug!(ticker = %ticker, rows = bars.len(), "Normalized chart response");

    Ok(bars)
}

fn cell(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten().filter(|v| v.is_finite())
}
