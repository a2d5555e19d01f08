pub mod engine;
pub mod error;
pub mod validation;

pub mod momentum;
pub mod trend;

pub use engine::*;
pub use error::IndicatorError;
pub use validation::*;
