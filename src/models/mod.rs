//! Shared data models spanning the analysis layers.

pub mod horizon;
pub mod indicators;
pub mod price;
pub mod signal;

pub use horizon::{AnalysisWindowConfig, Horizon, HorizonSelection};
pub use indicators::IndicatorSet;
pub use price::{PriceBar, PriceSeries};
pub use signal::{Evaluation, RiskParameters, RsiSignal, Snapshot, TrendBias};
