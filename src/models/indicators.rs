use serde::{Deserialize, Serialize};

use super::horizon::AnalysisWindowConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: usize,
}

/// SMA, EMA and RSI series aligned one-to-one with a `PriceSeries`.
///
/// Entries are `None` until the indicator's warm-up window is satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub windows: AnalysisWindowConfig,
    pub sma: Vec<Option<f64>>,
    pub ema: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.sma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sma.is_empty()
    }

    pub fn latest_sma(&self) -> Option<SmaIndicator> {
        last_defined(&self.sma).map(|value| SmaIndicator {
            value,
            period: self.windows.sma_window,
        })
    }

    pub fn latest_ema(&self) -> Option<EmaIndicator> {
        last_defined(&self.ema).map(|value| EmaIndicator {
            value,
            period: self.windows.ema_window,
        })
    }

    pub fn latest_rsi(&self) -> Option<RsiIndicator> {
        last_defined(&self.rsi).map(|value| RsiIndicator {
            value,
            period: self.windows.rsi_window,
        })
    }
}

/// Value of the final entry, if that entry is defined.
fn last_defined(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}
