//! Run configuration.
//!
//! Resolved once at startup, either from environment variables (hosted mode)
//! or from interactive prompts, and handed to the runtime as a value.

use chrono::NaiveDate;
use std::env;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::models::horizon::{Horizon, HorizonSelection};
use crate::services::yahoo::DEFAULT_BASE_URL;

pub const DEFAULT_TICKER: &str = "AAPL";
pub const DEFAULT_START_DATE: &str = "2024-01-01";
pub const DEFAULT_END_DATE: &str = "2024-12-31";
pub const DEFAULT_PORTFOLIO_VALUE: f64 = 10_000.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be a positive number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("no value provided for {0}")]
    MissingInput(&'static str),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Everything comes from environment variables.
    Hosted,
    /// Ticker, dates and horizon are prompted for on stdin.
    Interactive,
}

impl RunMode {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("RUN_MODE") {
            Some(mode) if mode.trim().eq_ignore_ascii_case("hosted") => RunMode::Hosted,
            _ => RunMode::Interactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub ticker: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub horizon: HorizonSelection,
    pub portfolio_value: f64,
    pub show_chart: bool,
    pub yahoo_base_url: String,
}

impl AnalysisConfig {
    /// Resolve the configuration for `mode` from the process environment
    /// and, in interactive mode, stdin/stdout.
    pub fn resolve(mode: RunMode) -> Result<Self, ConfigError> {
        let lookup = |key: &str| env::var(key).ok();
        match mode {
            RunMode::Hosted => Self::from_lookup(lookup),
            RunMode::Interactive => {
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                Self::from_prompts(stdin.lock(), &mut stdout, lookup)
            }
        }
    }

    /// Hosted mode: every field from `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ticker = lookup("TICKER").unwrap_or_else(|| DEFAULT_TICKER.to_string());
        let start = lookup("START_DATE").unwrap_or_else(|| DEFAULT_START_DATE.to_string());
        let end = lookup("END_DATE").unwrap_or_else(|| DEFAULT_END_DATE.to_string());
        let horizon = lookup("HORIZON").unwrap_or_else(|| Horizon::default().to_string());

        Self::build(&ticker, &start, &end, &horizon, &lookup)
    }

    /// Interactive mode: ticker, start date, end date and horizon are read
    /// from `input`; the rest comes from `lookup`.
    pub fn from_prompts<R: BufRead, W: Write>(
        mut input: R,
        output: &mut W,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let ticker = prompt(&mut input, output, "Enter stock ticker: ", "ticker")?;
        let start = prompt(&mut input, output, "Enter start date (YYYY-MM-DD): ", "start date")?;
        let end = prompt(&mut input, output, "Enter end date (YYYY-MM-DD): ", "end date")?;
        // EOF on the horizon prompt falls back like an unknown horizon.
        let horizon = match prompt(
            &mut input,
            output,
            "Enter trading horizon (short/medium/long): ",
            "horizon",
        ) {
            Ok(answer) => answer,
            Err(ConfigError::MissingInput(_)) => String::new(),
            Err(e) => return Err(e),
        };

        Self::build(&ticker, &start, &end, &horizon, &lookup)
    }

    fn build(
        ticker: &str,
        start: &str,
        end: &str,
        horizon: &str,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(ConfigError::MissingInput("ticker"));
        }

        let portfolio_value = match lookup("PORTFOLIO_VALUE") {
            Some(raw) => parse_portfolio_value(&raw)?,
            None => DEFAULT_PORTFOLIO_VALUE,
        };

        let show_chart = lookup("SHOW_CHART")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            ticker,
            start_date: parse_date("start date", start)?,
            end_date: parse_date("end date", end)?,
            horizon: Horizon::parse(horizon),
            portfolio_value,
            show_chart,
            yahoo_base_url: lookup("YAHOO_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        field,
        value: value.trim().to_string(),
    })
}

/// Portfolio value must be a finite, strictly positive amount.
fn parse_portfolio_value(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            field: "PORTFOLIO_VALUE",
            value: raw.to_string(),
        }),
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    field: &'static str,
) -> Result<String, ConfigError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConfigError::MissingInput(field));
    }
    Ok(line.trim().to_string())
}
