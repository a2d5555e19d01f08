//! HTTP client for the Yahoo Finance chart endpoint.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use super::messages::ChartResponse;
use crate::services::market_data::MarketDataError;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// The endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stockscope/0.1";

pub struct YahooClient {
    base_url: String,
    http: Client,
}

impl YahooClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Daily chart for `[start, end)`, unadjusted prices plus adjusted close.
    pub async fn chart(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartResponse, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let period1 = unix_midnight(start).to_string();
        let period2 = unix_midnight(end).to_string();

        debug!(url = %url, period1 = %period1, period2 = %period2, "Requesting chart");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("period1", period1.as_str()),
                ("period2", period2.as_str()),
                ("interval", "1d"),
                ("events", "history"),
                ("includeAdjustedClose", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Error payloads (unknown symbol, bad range) still use the chart envelope.
        match serde_json::from_str::<ChartResponse>(&body) {
            Ok(parsed) => {
                if let Some(err) = parsed.chart.error {
                    return Err(MarketDataError::Api {
                        code: err.code,
                        description: err.description,
                    });
                }
                if !status.is_success() {
                    return Err(MarketDataError::Api {
                        code: status.as_u16().to_string(),
                        description: status.canonical_reason().unwrap_or("").to_string(),
                    });
                }
                Ok(parsed)
            }
            Err(_) if !status.is_success() => Err(MarketDataError::Api {
                code: status.as_u16().to_string(),
                description: body.chars().take(200).collect(),
            }),
            Err(e) => Err(MarketDataError::Parse(e.to_string())),
        }
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}
