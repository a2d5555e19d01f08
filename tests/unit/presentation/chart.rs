//! Unit tests for chart construction and terminal plotting

use chrono::NaiveDate;
use stockscope::indicators::compute_indicators;
use stockscope::models::{Horizon, PriceBar, PriceSeries};
use stockscope::presentation::chart::{plot, Chart, ChartError, ChartLine, LineColor};

fn rising_series(days: i64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = (0..days)
        .map(|i| {
            let c = 100.0 + i as f64;
            PriceBar::new(start + chrono::Duration::days(i), c, c, c, c, c)
        })
        .collect();
    PriceSeries::new("NVDA", bars)
}

#[test]
fn test_price_with_indicators_lines() {
    let series = rising_series(30);
    let indicators = compute_indicators(&series, Horizon::Short.windows()).unwrap();
    let chart = Chart::price_with_indicators(&series, &indicators);

    assert_eq!(chart.title, "NVDA Stock Price with Indicators");
    assert_eq!(chart.x_label, "Date");
    assert_eq!(chart.y_label, "Price");
    assert_eq!(chart.dates.len(), 30);

    let labels: Vec<&str> = chart.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Close Price", "14-day SMA", "14-day EMA"]);
    assert_eq!(chart.lines[0].color, LineColor::Blue);
    assert_eq!(chart.lines[1].color, LineColor::Orange);
    assert_eq!(chart.lines[2].color, LineColor::Green);
    assert!(chart.lines.iter().all(|l| l.values.len() == 30));
}

#[test]
fn test_plot_contains_title_dates_and_legend() {
    let series = rising_series(30);
    let indicators = compute_indicators(&series, Horizon::Short.windows()).unwrap();
    let chart = Chart::price_with_indicators(&series, &indicators);

    let text = plot(&chart, 120, 40).unwrap();
    assert!(text.contains("NVDA Stock Price with Indicators"));
    assert!(text.contains("Date: 2024-01-01 .. 2024-01-30"));
    assert!(text.contains(
        "Legend: Close Price (blue)   14-day SMA (orange)   14-day EMA (green)"
    ));
}

#[test]
fn test_plot_empty_chart() {
    let chart = Chart {
        title: "empty".to_string(),
        x_label: "Date".to_string(),
        y_label: "Price".to_string(),
        dates: Vec::new(),
        lines: Vec::new(),
    };
    assert!(matches!(plot(&chart, 120, 40), Err(ChartError::Empty)));
}

#[test]
fn test_plot_without_defined_values() {
    let chart = Chart {
        title: "gaps".to_string(),
        x_label: "Date".to_string(),
        y_label: "Price".to_string(),
        dates: vec![NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
        lines: vec![ChartLine {
            label: "SMA".to_string(),
            color: LineColor::Orange,
            values: vec![None],
        }],
    };
    assert!(matches!(plot(&chart, 120, 40), Err(ChartError::NoDefinedValues)));
}

#[test]
fn test_plot_single_point_and_flat_range() {
    let chart = Chart {
        title: "one".to_string(),
        x_label: "Date".to_string(),
        y_label: "Price".to_string(),
        dates: vec![NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
        lines: vec![ChartLine {
            label: "Close Price".to_string(),
            color: LineColor::Blue,
            values: vec![Some(10.0)],
        }],
    };
    let text = plot(&chart, 120, 40).unwrap();
    assert!(text.contains("Legend: Close Price (blue)"));
}

#[test]
fn test_plot_clamps_tiny_canvas() {
    let series = rising_series(5);
    let indicators = compute_indicators(
        &series,
        stockscope::models::AnalysisWindowConfig::new(2, 2, 2),
    )
    .unwrap();
    let chart = Chart::price_with_indicators(&series, &indicators);

    let text = plot(&chart, 1, 1).unwrap();
    assert!(text.contains("NVDA Stock Price with Indicators"));
}
