//! Fixed fractional position sizing

use super::SignalError;
use crate::models::signal::RiskParameters;

/// Currency amount put at risk on one trade.
pub fn risk_amount(portfolio_value: f64, risk: &RiskParameters) -> f64 {
    portfolio_value * risk.risk_per_trade
}

/// Shares to buy so that hitting the stop loses exactly the risk amount.
///
/// position = (portfolio * risk_per_trade) / (stop_loss_fraction * close)
pub fn position_size(
    portfolio_value: f64,
    latest_close: f64,
    risk: &RiskParameters,
) -> Result<f64, SignalError> {
    // NaN fails this comparison too
    if !(latest_close > 0.0) {
        return Err(SignalError::NonPositivePrice(latest_close));
    }
    Ok(risk_amount(portfolio_value, risk) / (risk.stop_loss_fraction * latest_close))
}
