//! JSON export of balance reports
//!
//! Wraps a report with schema and application versions so consumers can
//! tell which shape they are reading.

use serde::Serialize;
use std::io::Write;

use crate::error::{BalanceError, BalanceResult};
use crate::services::BalanceReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned envelope around a report
#[derive(Debug, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Whether every account ends at zero
    pub balanced: bool,

    #[serde(flatten)]
    pub report: &'a BalanceReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a BalanceReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            balanced: report.is_balanced(),
            report,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &BalanceReport, writer: &mut W) -> BalanceResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ReportExport::new(report))
        .map_err(|e| BalanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BalanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{AccountId, BudgetMonth, BudgetSnapshot, LineItem, LineItemKind, Money};
    use crate::services::BalancingService;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_export() {
        let from = AccountId::new();
        let to = AccountId::new();
        let mut snapshot = BudgetSnapshot::new(BudgetMonth::new(2025, 1).unwrap());
        snapshot.push(LineItemKind::Income, LineItem::new(from, Money::new(dec!(1000))));
        snapshot.push(LineItemKind::Expense, LineItem::new(to, Money::new(dec!(1000))));

        let settings = Settings::default();
        let report = BalancingService::new(&settings).balance(&snapshot).unwrap();

        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["balanced"], true);
        assert_eq!(value["transfers"].as_array().unwrap().len(), 1);
        assert_eq!(value["transfers"][0]["amount"], "1000");
        assert_eq!(value["total_surplus"], "1000");
    }
}
