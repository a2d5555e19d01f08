//! Unit tests for risk sizing and signal evaluation

use chrono::NaiveDate;
use stockscope::indicators::compute_indicators_for_closes;
use stockscope::models::{
    AnalysisWindowConfig, Horizon, PriceBar, PriceSeries, RiskParameters, RsiSignal, Snapshot, TrendBias,
};
use stockscope::signals::{classify_rsi, evaluate, position_size, risk_amount, trend_bias, SignalError};
use stockscope::AnalysisError;

fn snapshot(close: f64, sma: f64, ema: f64, rsi: f64) -> Snapshot {
    Snapshot {
        close,
        sma,
        ema,
        rsi,
        portfolio_value: 10_000.0,
        risk: RiskParameters::default(),
    }
}

#[test]
fn test_default_risk_parameters() {
    let risk = RiskParameters::default();
    assert_eq!(risk.risk_per_trade, 0.01);
    assert_eq!(risk.stop_loss_fraction, 0.05);
    assert_eq!(risk_amount(10_000.0, &risk), 100.0);
}

#[test]
fn test_position_size_formula() {
    let size = position_size(10_000.0, 100.0, &RiskParameters::default()).unwrap();
    assert!((size - 20.0).abs() < 1e-9);
}

#[test]
fn test_position_size_scaling() {
    let risk = RiskParameters::default();
    let base = position_size(25_000.0, 80.0, &risk).unwrap();

    let doubled_portfolio = position_size(50_000.0, 80.0, &risk).unwrap();
    assert!((doubled_portfolio - 2.0 * base).abs() < 1e-9);

    let doubled_price = position_size(25_000.0, 160.0, &risk).unwrap();
    assert!((doubled_price - base / 2.0).abs() < 1e-9);
}

#[test]
fn test_position_size_rejects_non_positive_close() {
    let risk = RiskParameters::default();
    assert_eq!(
        position_size(10_000.0, 0.0, &risk),
        Err(SignalError::NonPositivePrice(0.0))
    );
    assert!(position_size(10_000.0, -5.0, &risk).is_err());
    assert!(position_size(10_000.0, f64::NAN, &risk).is_err());
}

#[test]
fn test_rsi_classification_boundaries() {
    assert_eq!(classify_rsi(70.0), RsiSignal::Neutral);
    assert_eq!(classify_rsi(70.0001), RsiSignal::Overbought);
    assert_eq!(classify_rsi(30.0), RsiSignal::Neutral);
    assert_eq!(classify_rsi(29.9999), RsiSignal::Oversold);
    assert_eq!(classify_rsi(50.0), RsiSignal::Neutral);
}

#[test]
fn test_trend_bias() {
    assert_eq!(trend_bias(101.0, 100.0), Some(TrendBias::Bullish));
    assert_eq!(trend_bias(99.0, 100.0), Some(TrendBias::Bearish));
    assert_eq!(trend_bias(100.0, 100.0), None);
}

#[test]
fn test_trend_bias_ignores_rounding_noise() {
    let sma: f64 = 123.37;
    let above = f64::from_bits(sma.to_bits() + 1);
    let below = f64::from_bits(sma.to_bits() - 1);
    assert_eq!(trend_bias(above, sma), None);
    assert_eq!(trend_bias(below, sma), None);
    assert_eq!(trend_bias(sma + 1e-9, sma), Some(TrendBias::Bullish));
    assert_eq!(trend_bias(sma - 1e-9, sma), Some(TrendBias::Bearish));
}

#[test]
fn test_flat_series_has_no_trend_bias() {
    for price in [0.1, 1.0, 101.7, 123.37, 987.65] {
        let closes = vec![price; 260];
        for horizon in Horizon::all() {
            let indicators = compute_indicators_for_closes(&closes, horizon.windows()).unwrap();
            let ema = indicators.latest_ema().unwrap().value;
            let sma = indicators.latest_sma().unwrap().value;
            assert_eq!(
                trend_bias(ema, sma),
                None,
                "price {} horizon {} ema {} sma {}",
                price,
                horizon,
                ema,
                sma
            );
        }
    }
}

#[test]
fn test_evaluate_snapshot() {
    let evaluation = evaluate(&snapshot(200.0, 190.0, 195.0, 75.0)).unwrap();
    assert!((evaluation.position_size - 10.0).abs() < 1e-9);
    assert_eq!(evaluation.risk_amount, 100.0);
    assert_eq!(evaluation.rsi_signal, RsiSignal::Overbought);
    assert_eq!(evaluation.trend_bias, Some(TrendBias::Bullish));
}

#[test]
fn test_evaluate_zero_close_fails() {
    assert!(evaluate(&snapshot(0.0, 1.0, 1.0, 50.0)).is_err());
}

#[test]
fn test_snapshot_from_latest_requires_warm_up() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars: Vec<PriceBar> = (0..10)
        .map(|i| {
            let c = 100.0 + i as f64;
            PriceBar::new(start + chrono::Duration::days(i), c, c, c, c, c)
        })
        .collect();
    let series = PriceSeries::new("TEST", bars);
    let windows = AnalysisWindowConfig::new(5, 5, 14);
    let indicators = compute_indicators_for_closes(&series.closes(), windows).unwrap();

    let err = Snapshot::from_latest(&series, &indicators, 10_000.0, RiskParameters::default())
        .unwrap_err();
    match err {
        AnalysisError::Conversion(message) => assert!(message.contains("RSI")),
        other => panic!("expected conversion error, got {:?}", other),
    }
}

#[test]
fn test_snapshot_from_latest() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars: Vec<PriceBar> = (0..20)
        .map(|i| {
            let c = 100.0 + i as f64;
            PriceBar::new(start + chrono::Duration::days(i), c, c, c, c, c)
        })
        .collect();
    let series = PriceSeries::new("TEST", bars);
    let indicators =
        compute_indicators_for_closes(&series.closes(), AnalysisWindowConfig::new(5, 5, 14))
            .unwrap();

    let snap =
        Snapshot::from_latest(&series, &indicators, 5_000.0, RiskParameters::default()).unwrap();
    assert_eq!(snap.close, 119.0);
    assert!((snap.sma - 117.0).abs() < 1e-9);
    assert_eq!(snap.rsi, 100.0);
    assert_eq!(snap.portfolio_value, 5_000.0);
}
