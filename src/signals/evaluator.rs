//! Snapshot evaluation: position size, RSI zone and EMA/SMA trend bias.

use super::risk::{position_size, risk_amount};
use super::SignalError;
use crate::models::signal::{Evaluation, RsiSignal, Snapshot, TrendBias};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Classify RSI. The thresholds themselves are neutral.
pub fn classify_rsi(rsi: f64) -> RsiSignal {
    if rsi > RSI_OVERBOUGHT {
        RsiSignal::Overbought
    } else if rsi < RSI_OVERSOLD {
        RsiSignal::Oversold
    } else {
        RsiSignal::Neutral
    }
}

// Averages within this many ULPs of each other count as equal.
const TREND_TOLERANCE_ULPS: f64 = 4.0;

/// EMA above SMA is bullish, below is bearish, equal carries no bias.
///
/// Equality is relative to the magnitude of the SMA, so rounding noise in
/// the two averages never produces a bias on a flat series.
pub fn trend_bias(ema: f64, sma: f64) -> Option<TrendBias> {
    let tolerance = f64::EPSILON * TREND_TOLERANCE_ULPS * sma.abs().max(1.0);
    if (ema - sma).abs() <= tolerance {
        None
    } else if ema > sma {
        Some(TrendBias::Bullish)
    } else {
        Some(TrendBias::Bearish)
    }
}

pub fn evaluate(snapshot: &Snapshot) -> Result<Evaluation, SignalError> {
    let size = position_size(snapshot.portfolio_value, snapshot.close, &snapshot.risk)?;

    Ok(Evaluation {
        position_size: size,
        risk_amount: risk_amount(snapshot.portfolio_value, &snapshot.risk),
        rsi_signal: classify_rsi(snapshot.rsi),
        trend_bias: trend_bias(snapshot.ema, snapshot.sma),
    })
}
