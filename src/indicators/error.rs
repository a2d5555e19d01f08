use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("{name} window must be at least 1, got {window}")]
    InvalidWindow { name: &'static str, window: usize },

    #[error("close series is empty")]
    EmptySeries,

    #[error("close at index {index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },
}
