//! Console report formatting

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::models::horizon::{AnalysisWindowConfig, Horizon};
use crate::models::signal::{Evaluation, RsiSignal, Snapshot, TrendBias};

/// Everything the console report shows for one completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub horizon: Horizon,
    pub windows: AnalysisWindowConfig,
    pub snapshot: Snapshot,
    pub evaluation: Evaluation,
}

pub fn render_header(ticker: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!("\n🔍 Analyzing {} from {} to {}...\n", ticker, start, end)
}

pub fn rsi_signal_line(signal: RsiSignal) -> &'static str {
    match signal {
        RsiSignal::Overbought => "📈 Strong overbought signal (consider selling).",
        RsiSignal::Oversold => "📉 Strong oversold signal (consider buying).",
        RsiSignal::Neutral => "⚖️ No strong signal detected.",
    }
}

pub fn trend_line(bias: TrendBias) -> &'static str {
    match bias {
        TrendBias::Bullish => "📈 Bullish trend (EMA above SMA).",
        TrendBias::Bearish => "📉 Bearish trend (EMA below SMA).",
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let snapshot = &report.snapshot;
    let evaluation = &report.evaluation;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "📊 Latest Data for {}:", report.ticker);
    let _ = writeln!(out, "  - Latest Close Price: ${:.2}", snapshot.close);
    let _ = writeln!(out, "  - RSI ({}): {:.2}", report.windows.rsi_window, snapshot.rsi);
    let _ = writeln!(out, "  - SMA ({}): ${:.2}", report.windows.sma_window, snapshot.sma);
    let _ = writeln!(out, "  - EMA ({}): ${:.2}", report.windows.ema_window, snapshot.ema);

    let _ = writeln!(out, "\n💼 Risk Management:");
    let _ = writeln!(out, "  - Portfolio Value: ${:.2}", snapshot.portfolio_value);
    let _ = writeln!(
        out,
        "  - Risk Amount: ${:.2} ({:.2}% per trade, {:.2}% stop loss)",
        evaluation.risk_amount,
        snapshot.risk.risk_per_trade * 100.0,
        snapshot.risk.stop_loss_fraction * 100.0
    );
    let _ = writeln!(
        out,
        "  - Recommended Position Size: {:.2} shares based on risk management.",
        evaluation.position_size
    );

    let _ = writeln!(out, "\n⚖️ Signal Analysis ({}-term horizon):", report.horizon);
    let _ = writeln!(out, "  - {}", rsi_signal_line(evaluation.rsi_signal));
    if let Some(bias) = evaluation.trend_bias {
        let _ = writeln!(out, "  - {}", trend_line(bias));
    }

    let _ = writeln!(
        out,
        "\n📅 Data range: {} to {}",
        report.start_date, report.end_date
    );
    let _ = writeln!(out, "📈 Happy Trading!");

    out
}
