//! One analysis run: fetch, indicators, evaluation, report, chart.

use std::io::Write;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::indicators::compute_indicators;
use crate::models::signal::{RiskParameters, Snapshot};
use crate::presentation::chart::{Chart, ChartRenderer};
use crate::presentation::report::{render_header, render_report, AnalysisReport};
use crate::services::market_data::{fetch_price_series, FetchOutcome, MarketDataProvider};
use crate::signals::evaluate;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Completed(AnalysisReport),
    /// The run stopped before any indicator was computed.
    NoData { reason: String },
}

/// Wires the provider and chart collaborators into the analysis pipeline.
pub struct Analyzer<'a> {
    provider: &'a dyn MarketDataProvider,
    chart: &'a dyn ChartRenderer,
    risk: RiskParameters,
}

impl<'a> Analyzer<'a> {
    pub fn new(provider: &'a dyn MarketDataProvider, chart: &'a dyn ChartRenderer) -> Self {
        Self {
            provider,
            chart,
            risk: RiskParameters::default(),
        }
    }

    pub fn with_risk(mut self, risk: RiskParameters) -> Self {
        self.risk = risk;
        self
    }

    /// Run the analysis for `config`, writing the console report to `out`.
    ///
    /// Missing data is not an error: it is reported to `out` and returned as
    /// [`AnalysisOutcome::NoData`]. Any later failure aborts the run before
    /// the report is written.
    pub async fn run<W: Write>(
        &self,
        config: &AnalysisConfig,
        out: &mut W,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let ticker = config.ticker.as_str();
        writeln!(out, "{}", render_header(ticker, config.start_date, config.end_date))?;

        if let Some(notice) = config.horizon.notice() {
            warn!(
                input = ?config.horizon.fallback_from,
                horizon = %config.horizon.horizon,
                "Unrecognized horizon, using default preset"
            );
            writeln!(out, "{}", notice)?;
        }

        let series = match fetch_price_series(
            self.provider,
            ticker,
            config.start_date,
            config.end_date,
        )
        .await
        {
            FetchOutcome::Data(series) => series,
            FetchOutcome::Unavailable(reason) => {
                writeln!(out, "{}", reason)?;
                writeln!(out, "Could not retrieve stock data for {}. Exiting.", ticker)?;
                return Ok(AnalysisOutcome::NoData { reason });
            }
        };

        let windows = config.horizon.horizon.windows();
        let indicators = compute_indicators(&series, windows)?;
        let snapshot = Snapshot::from_latest(&series, &indicators, config.portfolio_value, self.risk)?;
        let evaluation = evaluate(&snapshot)?;

        info!(
            ticker = %ticker,
            close = snapshot.close,
            rsi = snapshot.rsi,
            signal = %evaluation.rsi_signal,
            trend = ?evaluation.trend_bias,
            position_size = evaluation.position_size,
            "Analysis complete"
        );

        let report = AnalysisReport {
            ticker: ticker.to_string(),
            start_date: config.start_date,
            end_date: config.end_date,
            horizon: config.horizon.horizon,
            windows,
            snapshot,
            evaluation,
        };
        write!(out, "{}", render_report(&report))?;
        out.flush()?;

        self.chart
            .render(&Chart::price_with_indicators(&series, &indicators))?;

        Ok(AnalysisOutcome::Completed(report))
    }
}
