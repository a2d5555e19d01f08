//! Computes the SMA/EMA/RSI set for a price series.

use tracing::debug;

use super::error::IndicatorError;
use super::momentum::calculate_rsi;
use super::trend::{calculate_ema, calculate_sma};
use super::validation::{validate_closes, validate_window};
use crate::models::horizon::AnalysisWindowConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::price::PriceSeries;

/// Indicators over the close prices of `series`.
pub fn compute_indicators(
    series: &PriceSeries,
    windows: AnalysisWindowConfig,
) -> Result<IndicatorSet, IndicatorError> {
    compute_indicators_for_closes(&series.closes(), windows)
}

pub fn compute_indicators_for_closes(
    closes: &[f64],
    windows: AnalysisWindowConfig,
) -> Result<IndicatorSet, IndicatorError> {
    validate_window("SMA", windows.sma_window)?;
    validate_window("EMA", windows.ema_window)?;
    validate_window("RSI", windows.rsi_window)?;
    validate_closes(closes)?;

    debug!(
        rows = closes.len(),
        sma_window = windows.sma_window,
        ema_window = windows.ema_window,
        rsi_window = windows.rsi_window,
        "Computing indicators"
    );

    Ok(IndicatorSet {
        windows,
        sma: calculate_sma(closes, windows.sma_window),
        ema: calculate_ema(closes, windows.ema_window),
        rsi: calculate_rsi(closes, windows.rsi_window),
    })
}
