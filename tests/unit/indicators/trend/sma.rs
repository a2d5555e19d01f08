//! Unit tests for SMA indicator

use stockscope::indicators::trend::calculate_sma;

#[test]
fn test_sma_warm_up_and_values() {
    let closes = [1.0, 2.0, 3.0, 4.0, 5.0];
    let sma = calculate_sma(&closes, 3);
    assert_eq!(sma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_matches_trailing_mean() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 11) as f64 * 1.3).collect();
    for window in [1usize, 2, 5, 14, 40] {
        let sma = calculate_sma(&closes, window);
        assert_eq!(sma.len(), closes.len());
        for (i, value) in sma.iter().enumerate() {
            if i + 1 < window {
                assert!(value.is_none(), "window {} index {} should be undefined", window, i);
            } else {
                let slice = &closes[i + 1 - window..=i];
                let expected = slice.iter().sum::<f64>() / window as f64;
                let actual = value.expect("defined after warm-up");
                assert!((actual - expected).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_sma_insufficient_data() {
    let sma = calculate_sma(&[1.0, 2.0], 5);
    assert_eq!(sma, vec![None, None]);
}

#[test]
fn test_sma_zero_period() {
    assert!(calculate_sma(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
}

#[test]
fn test_sma_flat_series_is_exact() {
    for price in [0.1, 101.7, 123.37, 987.65] {
        let closes = vec![price; 260];
        for window in [14usize, 50, 200] {
            let sma = calculate_sma(&closes, window);
            assert!(
                sma[window - 1..].iter().all(|v| *v == Some(price)),
                "price {} window {}",
                price,
                window
            );
        }
    }
}
