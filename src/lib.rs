//! Stockscope: single-ticker technical analysis.
//!
//! Fetches daily prices, derives SMA/EMA/RSI, sizes a position from a fixed
//! fractional risk model and reports an RSI/trend signal.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod services;
pub mod signals;

pub use error::AnalysisError;
