//! Run-level error taxonomy.

use thiserror::Error;

use crate::config::ConfigError;
use crate::indicators::IndicatorError;
use crate::presentation::chart::ChartError;
use crate::signals::SignalError;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reasons an analysis run is aborted.
///
/// Missing data is not among them: it ends the run with
/// `AnalysisOutcome::NoData`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A latest-row value could not be turned into a finite number.
    #[error("conversion error: {0}")]
    Conversion(String),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
