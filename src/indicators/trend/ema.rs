//! EMA (Exponential Moving Average) indicator

/// Smoothing factor for an EMA over `period` points.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Exponential moving average of `closes`.
///
/// EMA_0 = close_0, EMA_i = alpha * close_i + (1 - alpha) * EMA_{i-1},
/// evaluated as EMA_{i-1} + alpha * (close_i - EMA_{i-1}) so a flat series
/// stays exactly flat.
/// The recursion runs from the first close; entries before index
/// `period - 1` are reported as `None`.
pub fn calculate_ema(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.is_empty() {
        return out;
    }

    let alpha = ema_alpha(period);
    let mut ema = closes[0];

    for (i, &close) in closes.iter().enumerate() {
        if i > 0 {
            ema += alpha * (close - ema);
        }
        if i + 1 >= period {
            out[i] = Some(ema);
        }
    }

    out
}
