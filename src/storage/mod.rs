//! Snapshot loading
//!
//! The engine never persists anything. This module only reads the budget
//! snapshot a caller hands over, as JSON or YAML.

pub mod file_io;

use std::path::Path;

use tracing::debug;

use crate::error::BalanceResult;
use crate::models::BudgetSnapshot;

pub use file_io::FileFormat;

/// Load a budget snapshot from disk
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> BalanceResult<BudgetSnapshot> {
    let path = path.as_ref();
    let snapshot: BudgetSnapshot = file_io::read_required(path)?;

    debug!(
        path = %path.display(),
        budget = %snapshot.budget.id,
        income = snapshot.income.len(),
        expenses = snapshot.expenses.len(),
        savings = snapshot.savings.len(),
        "loaded budget snapshot"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetMonth, LineItemKind, Money};
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    const YAML_SNAPSHOT: &str = r#"
budget:
  month: "2025-01"
  name: January
accounts:
  - id: 00000000-0000-0000-0000-000000000001
    name: Checking
  - id: 00000000-0000-0000-0000-000000000002
    name: Savings
income:
  - account_id: 00000000-0000-0000-0000-000000000001
    amount: "1000.33"
    description: Salary
savings:
  - account_id: 00000000-0000-0000-0000-000000000002
    amount: "1000.33"
"#;

    #[test]
    fn test_load_yaml_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("january.yaml");
        fs::write(&path, YAML_SNAPSHOT).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.budget.month, BudgetMonth::new(2025, 1).unwrap());
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(
            snapshot.total(LineItemKind::Income),
            Money::new(dec!(1000.33))
        );
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_load_json_snapshot_missing_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(
            &path,
            r#"{
                "budget": { "month": "2025-01" },
                "income": [ { "account_id": "00000000-0000-0000-0000-000000000001" } ]
            }"#,
        )
        .unwrap();

        assert!(load_snapshot(&path).is_err());
    }

    #[test]
    fn test_load_json_snapshot_bare_number_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("float.json");
        fs::write(
            &path,
            r#"{
                "budget": { "month": "2025-01" },
                "income": [
                    {
                        "account_id": "00000000-0000-0000-0000-000000000001",
                        "amount": 12345678901234567.89
                    }
                ]
            }"#,
        )
        .unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, crate::error::BalanceError::Json(_)));
    }

    #[test]
    fn test_load_yaml_snapshot_unquoted_amount_is_exact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("float.yaml");
        fs::write(
            &path,
            "budget:\n  month: \"2025-01\"\nincome:\n  - account_id: 00000000-0000-0000-0000-000000000001\n    amount: 12345678901234567.89\n",
        )
        .unwrap();

        if let Ok(snapshot) = load_snapshot(&path) {
            assert_eq!(
                snapshot.total(LineItemKind::Income),
                Money::new(dec!(12345678901234567.89))
            );
        }
    }
}
