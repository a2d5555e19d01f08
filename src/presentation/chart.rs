//! Price chart description and renderers.
//!
//! The runtime only builds a [`Chart`] and hands it to a [`ChartRenderer`];
//! what draws it is up to the renderer.

use chrono::NaiveDate;
use rgb::RGB8;
use std::io::{self, Write};
use textplots::{Chart as TextChart, ColorPlot, Shape};
use thiserror::Error;

use crate::models::indicators::IndicatorSet;
use crate::models::price::PriceSeries;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart has no points")]
    Empty,

    #[error("chart has no defined values to plot")]
    NoDefinedValues,

    #[error("failed to write chart: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Blue,
    Orange,
    Green,
}

impl LineColor {
    pub fn name(&self) -> &'static str {
        match self {
            LineColor::Blue => "blue",
            LineColor::Orange => "orange",
            LineColor::Green => "green",
        }
    }

    pub fn rgb(&self) -> RGB8 {
        match self {
            LineColor::Blue => RGB8::new(31, 119, 180),
            LineColor::Orange => RGB8::new(255, 127, 14),
            LineColor::Green => RGB8::new(44, 160, 44),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub color: LineColor,
    /// Aligned with [`Chart::dates`]; `None` leaves a gap.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub dates: Vec<NaiveDate>,
    pub lines: Vec<ChartLine>,
}

impl Chart {
    /// Close price with the SMA and EMA overlaid.
    pub fn price_with_indicators(series: &PriceSeries, indicators: &IndicatorSet) -> Self {
        let closes = series.closes().into_iter().map(Some).collect();

        Self {
            title: format!("{} Stock Price with Indicators", series.ticker()),
            x_label: "Date".to_string(),
            y_label: "Price".to_string(),
            dates: series.dates(),
            lines: vec![
                ChartLine {
                    label: "Close Price".to_string(),
                    color: LineColor::Blue,
                    values: closes,
                },
                ChartLine {
                    label: format!("{}-day SMA", indicators.windows.sma_window),
                    color: LineColor::Orange,
                    values: indicators.sma.clone(),
                },
                ChartLine {
                    label: format!("{}-day EMA", indicators.windows.ema_window),
                    color: LineColor::Green,
                    values: indicators.ema.clone(),
                },
            ],
        }
    }

    fn value_range(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|line| line.values.iter().flatten())
            .filter(|v| v.is_finite())
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &Chart) -> Result<(), ChartError>;
}

/// Discards charts. Used when charting is switched off.
pub struct NullChartRenderer;

impl ChartRenderer for NullChartRenderer {
    fn render(&self, _chart: &Chart) -> Result<(), ChartError> {
        Ok(())
    }
}

/// Draws the chart on stdout through `textplots`.
pub struct TerminalChartRenderer {
    width: u32,
    height: u32,
}

impl TerminalChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TerminalChartRenderer {
    fn default() -> Self {
        Self::new(160, 60)
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(&self, chart: &Chart) -> Result<(), ChartError> {
        let text = plot(chart, self.width, self.height)?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}

// textplots panics below these canvas sizes.
const MIN_WIDTH: u32 = 32;
const MIN_HEIGHT: u32 = 3;

/// Lay `chart` out on a `textplots` canvas of `width` x `height` dots and
/// return it with the title, date span and legend around it.
pub fn plot(chart: &Chart, width: u32, height: u32) -> Result<String, ChartError> {
    if chart.dates.is_empty() {
        return Err(ChartError::Empty);
    }
    let (mut lo, mut hi) = chart.value_range().ok_or(ChartError::NoDefinedValues)?;
    if hi == lo {
        lo -= 1.0;
        hi += 1.0;
    }

    let points: Vec<Vec<(f32, f32)>> = chart.lines.iter().map(line_points).collect();
    let shapes: Vec<Shape> = points.iter().map(|p| Shape::Lines(p)).collect();
    let x_max = chart.dates.len().saturating_sub(1).max(1) as f32;

    let mut canvas = TextChart::new_with_y_range(
        width.max(MIN_WIDTH),
        height.max(MIN_HEIGHT),
        0.0,
        x_max,
        lo as f32,
        hi as f32,
    );
    let canvas = shapes
        .iter()
        .zip(&chart.lines)
        .fold(&mut canvas, |canvas, (shape, line)| {
            canvas.linecolorplot(shape, line.color.rgb())
        });
    canvas.axis();
    canvas.figures();

    let legend: Vec<String> = chart
        .lines
        .iter()
        .map(|line| format!("{} ({})", line.label, line.color.name()))
        .collect();

    let first = chart.dates[0];
    let last = chart.dates[chart.dates.len() - 1];
    Ok(format!(
        "\n{}\n{}\n{}\n{}: {} .. {}\nLegend: {}\n",
        chart.title,
        chart.y_label,
        canvas,
        chart.x_label,
        first,
        last,
        legend.join("   ")
    ))
}

/// Defined values as (index, value) points; gaps are skipped.
fn line_points(line: &ChartLine) -> Vec<(f32, f32)> {
    line.values
        .iter()
        .enumerate()
        .filter_map(|(i, value)| {
            value
                .filter(|v| v.is_finite())
                .map(|v| (i as f32, v as f32))
        })
        .collect()
}
