//! User settings for envelope-balance
//!
//! Manages display preferences, the default output format, the log filter,
//! and whether unbalanced budgets are treated as errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::BalancePaths;
use crate::error::BalanceError;

/// How a transfer plan is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table (default)
    #[default]
    Table,
    /// Checklist of transfers to execute
    Todo,
    /// Machine-readable JSON report
    Json,
    /// Spreadsheet-compatible CSV
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Todo => write!(f, "todo"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// User settings for envelope-balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub output_format: OutputFormat,

    /// `tracing` filter directive, overridden by `ENVELOPE_BALANCE_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Treat budgets whose surplus and deficit differ as an error
    #[serde(default)]
    pub fail_on_unbalanced: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "envelope_balance=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            output_format: OutputFormat::default(),
            log_filter: default_log_filter(),
            fail_on_unbalanced: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BalancePaths) -> Result<Self, BalanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BalanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BalanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BalancePaths) -> Result<(), BalanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BalanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BalanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
