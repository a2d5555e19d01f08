//! Console report and chart output.

pub mod chart;
pub mod report;

pub use chart::{Chart, ChartError, ChartLine, ChartRenderer, LineColor};
pub use report::{render_header, render_report, AnalysisReport};
