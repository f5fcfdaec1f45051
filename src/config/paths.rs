//! Path management for envelope-balance
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default location of budget snapshots.
//!
//! ## Path Resolution Order
//!
//! 1. `ENVELOPE_BALANCE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/envelope-balance` or `~/.config/envelope-balance`
//! 3. Windows: `%APPDATA%\envelope-balance`

use std::path::{Path, PathBuf};

use crate::error::BalanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ENVELOPE_BALANCE_DATA_DIR";

const APP_DIR: &str = "envelope-balance";

/// Manages all paths used by envelope-balance
#[derive(Debug, Clone)]
pub struct BalancePaths {
    base_dir: PathBuf,
}

impl BalancePaths {
    /// Create a new BalancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BalanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BalancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/envelope-balance/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory where relative snapshot names are looked up
    pub fn snapshots_dir(&self) -> PathBuf {
        self.base_dir.join("snapshots")
    }

    /// Resolve a snapshot argument
    ///
    /// Paths that exist as given are used directly; bare names are looked
    /// up in the snapshots directory.
    pub fn resolve_snapshot(&self, name: &str) -> PathBuf {
        let direct = PathBuf::from(name);
        if direct.exists() || direct.is_absolute() {
            return direct;
        }
        let candidate = self.snapshots_dir().join(name);
        if candidate.exists() {
            candidate
        } else {
            direct
        }
    }

    /// Ensure the base and snapshots directories exist
    pub fn ensure_directories(&self) -> Result<(), BalanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BalanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.snapshots_dir()).map_err(|e| {
            BalanceError::Io(format!("Failed to create snapshots directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BalanceError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BalanceError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BalanceError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BalanceError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}
