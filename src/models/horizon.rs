//! Trading-horizon presets and the indicator windows they imply.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Window lengths handed to the indicator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindowConfig {
    pub sma_window: usize,
    pub ema_window: usize,
    pub rsi_window: usize,
}

impl AnalysisWindowConfig {
    pub fn new(sma_window: usize, ema_window: usize, rsi_window: usize) -> Self {
        Self {
            sma_window,
            ema_window,
            rsi_window,
        }
    }
}

impl Default for AnalysisWindowConfig {
    fn default() -> Self {
        Horizon::default().windows()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    #[default]
    Short,
    Medium,
    Long,
}

impl Horizon {
    pub fn all() -> [Horizon; 3] {
        [Horizon::Short, Horizon::Medium, Horizon::Long]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Short => "short",
            Horizon::Medium => "medium",
            Horizon::Long => "long",
        }
    }

    /// (sma, ema) window pair for the preset.
    pub fn moving_average_windows(&self) -> (usize, usize) {
        match self {
            Horizon::Short => (14, 14),
            Horizon::Medium => (50, 50),
            Horizon::Long => (200, 200),
        }
    }

    pub fn windows(&self) -> AnalysisWindowConfig {
        let (sma, ema) = self.moving_average_windows();
        AnalysisWindowConfig::new(sma, ema, DEFAULT_RSI_WINDOW)
    }

    /// Resolve user input to a preset. Unknown input falls back to `Short`
    /// and the selection records that it did.
    pub fn parse(input: &str) -> HorizonSelection {
        let normalized = input.trim().to_ascii_lowercase();
        let matched = Horizon::all()
            .into_iter()
            .find(|horizon| horizon.as_str() == normalized);

        match matched {
            Some(horizon) => HorizonSelection {
                horizon,
                fallback_from: None,
            },
            None => HorizonSelection {
                horizon: Horizon::default(),
                fallback_from: Some(input.trim().to_string()),
            },
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`Horizon::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonSelection {
    pub horizon: Horizon,
    /// The unrecognized input, when the default preset was substituted.
    pub fallback_from: Option<String>,
}

impl HorizonSelection {
    pub fn is_fallback(&self) -> bool {
        self.fallback_from.is_some()
    }

    pub fn notice(&self) -> Option<String> {
        self.fallback_from.as_ref().map(|input| {
            format!(
                "Unrecognized horizon '{}', defaulting to {}-term ({} / {}).",
                input,
                self.horizon,
                self.horizon.windows().sma_window,
                self.horizon.windows().ema_window
            )
        })
    }
}
