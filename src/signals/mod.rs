//! Risk sizing and market-state classification.

pub mod evaluator;
pub mod risk;

pub use evaluator::*;
pub use risk::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("latest close must be positive to size a position, got {0}")]
    NonPositivePrice(f64),
}
