//! RSI (Relative Strength Index) indicator, Wilder's smoothing
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss
//!
//! The first averages are the simple mean of the first `period`
//! close-to-close moves; later ones follow
//! avg = (prev_avg * (period - 1) + current) / period.

/// RSI from smoothed averages. No losses gives 100, a flat window gives 50.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI series aligned with `closes`; the first `period` entries are `None`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        })
        .unzip();

    let period_f = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // gains[j] is the move into closes[j + 1]
    for j in period..gains.len() {
        avg_gain = (avg_gain * (period_f - 1.0) + gains[j]) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + losses[j]) / period_f;
        out[j + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}
