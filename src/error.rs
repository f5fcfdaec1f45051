//! Custom error types for envelope-balance
//!
//! The balancing core itself is total over well-formed input; these errors
//! cover everything around it: loading snapshots, settings, validation of
//! caller-supplied line items, and rendering plans.

use thiserror::Error;

use crate::models::Money;

/// The main error type for envelope-balance operations
#[derive(Error, Debug)]
pub enum BalanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for snapshots and models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Aggregate income does not cover expenses and savings (or vice versa)
    #[error("Budget is unbalanced: {surplus} unmatched surplus, {deficit} unmatched deficit")]
    Unbalanced { surplus: Money, deficit: Money },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BalanceError {
    /// Create a "not found" error for snapshot files
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Snapshot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unbalanced-budget error
    pub fn is_unbalanced(&self) -> bool {
        matches!(self, Self::Unbalanced { .. })
    }
}

impl From<std::io::Error> for BalanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BalanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BalanceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for BalanceError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for envelope-balance operations
pub type BalanceResult<T> = Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BalanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BalanceError::snapshot_not_found("january.json");
        assert_eq!(err.to_string(), "Snapshot not found: january.json");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unbalanced_error() {
        let err = BalanceError::Unbalanced {
            surplus: Money::from_scaled(250, 0),
            deficit: Money::zero(),
        };
        assert_eq!(
            err.to_string(),
            "Budget is unbalanced: $250.00 unmatched surplus, $0.00 unmatched deficit"
        );
        assert!(err.is_unbalanced());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BalanceError = io_err.into();
        assert!(matches!(err, BalanceError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{ not: a list").unwrap_err();
        let err: BalanceError = yaml_err.into();
        assert!(matches!(err, BalanceError::Yaml(_)));
    }
}
