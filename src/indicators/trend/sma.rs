//! SMA (Simple Moving Average) indicator

/// Trailing arithmetic mean of `closes` over `period` points.
///
/// The output is aligned with the input; the first `period - 1` entries are
/// `None`. A zero period yields an all-`None` series.
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return out;
    }

    for i in (period - 1)..closes.len() {
        out[i] = Some(window_mean(&closes[i + 1 - period..=i]));
    }

    out
}

/// Mean taken relative to the window's first value, so a flat window
/// averages to exactly that value.
fn window_mean(window: &[f64]) -> f64 {
    let pivot = window[0];
    let offset: f64 = window.iter().map(|c| c - pivot).sum();
    pivot + offset / window.len() as f64
}
