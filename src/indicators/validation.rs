//! Input checks shared by the indicator calculators.

use super::error::IndicatorError;

pub fn validate_window(name: &'static str, window: usize) -> Result<(), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow { name, window });
    }
    Ok(())
}

/// The close series must be non-empty and every value finite.
pub fn validate_closes(closes: &[f64]) -> Result<(), IndicatorError> {
    if closes.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }
    if let Some((index, &value)) = closes.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(IndicatorError::NonFinite { index, value });
    }
    Ok(())
}
