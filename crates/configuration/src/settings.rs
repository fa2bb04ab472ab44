use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Contains parameters for the calculation history file.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    /// Where the CSV history file lives.
    #[serde(default = "default_history_path")]
    pub file_path: PathBuf,
    /// How many calculations to retain; the oldest are evicted beyond this.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Whether the REPL writes the history file automatically on exit.
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
}

/// Contains parameters for result presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Fractional digits shown when formatting a result.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("tally_history.csv")
}

fn default_max_size() -> usize {
    1000
}

fn default_auto_save() -> bool {
    true
}

fn default_precision() -> u32 {
    10
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            file_path: default_history_path(),
            max_size: default_max_size(),
            auto_save: default_auto_save(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl Settings {
    /// Range-checks the loaded values.
    ///
    /// `Decimal` carries at most 28 fractional digits, so a display precision
    /// beyond that can never be honored; a zero-sized history would silently
    /// discard every calculation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_size == 0 {
            return Err(ConfigError::ValidationError(
                "history.max_size must be greater than zero".to_string(),
            ));
        }
        if self.display.precision > 28 {
            return Err(ConfigError::ValidationError(format!(
                "display.precision must be at most 28, got {}",
                self.display.precision
            )));
        }
        Ok(())
    }
}
