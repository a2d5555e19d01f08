use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicators::IndicatorSet;
use super::price::PriceSeries;
use crate::error::AnalysisError;

pub const DEFAULT_RISK_PER_TRADE: f64 = 0.01;
pub const DEFAULT_STOP_LOSS_FRACTION: f64 = 0.05;

/// Fixed fractional risk model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Share of the portfolio put at risk on one trade.
    pub risk_per_trade: f64,
    /// Distance of the stop below entry, as a fraction of entry price.
    pub stop_loss_fraction: f64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            risk_per_trade: DEFAULT_RISK_PER_TRADE,
            stop_loss_fraction: DEFAULT_STOP_LOSS_FRACTION,
        }
    }
}

/// Latest close and indicator values for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub close: f64,
    pub sma: f64,
    pub ema: f64,
    pub rsi: f64,
    pub portfolio_value: f64,
    pub risk: RiskParameters,
}

impl Snapshot {
    /// Take the final row of `series`/`indicators`.
    ///
    /// Fails with [`AnalysisError::Conversion`] when the final row has no
    /// finite value for the close or any indicator, which happens when the
    /// series is shorter than a warm-up window.
    pub fn from_latest(
        series: &PriceSeries,
        indicators: &IndicatorSet,
        portfolio_value: f64,
        risk: RiskParameters,
    ) -> Result<Self, AnalysisError> {
        let close = series.latest().map(|bar| bar.close);

        Ok(Self {
            close: finite("Close", close)?,
            sma: finite("SMA", indicators.latest_sma().map(|i| i.value))?,
            ema: finite("EMA", indicators.latest_ema().map(|i| i.value))?,
            rsi: finite("RSI", indicators.latest_rsi().map(|i| i.value))?,
            portfolio_value,
            risk,
        })
    }
}

fn finite(field: &str, value: Option<f64>) -> Result<f64, AnalysisError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(AnalysisError::Conversion(format!(
            "latest {} value {} is not a finite number",
            field, v
        ))),
        None => Err(AnalysisError::Conversion(format!(
            "latest {} value is undefined (not enough rows for the indicator window)",
            field
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "overbought",
            RsiSignal::Oversold => "oversold",
            RsiSignal::Neutral => "neutral",
        }
    }
}

impl fmt::Display for RsiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendBias {
    Bullish,
    Bearish,
}

impl TrendBias {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendBias::Bullish => "bullish",
            TrendBias::Bearish => "bearish",
        }
    }
}

impl fmt::Display for TrendBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position size and market-state classification derived from a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Shares to buy.
    pub position_size: f64,
    /// Currency amount at risk.
    pub risk_amount: f64,
    pub rsi_signal: RsiSignal,
    /// `None` when EMA equals SMA.
    pub trend_bias: Option<TrendBias>,
}
