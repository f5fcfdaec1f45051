//! CSV export of transfer plans
//!
//! One row per transfer, in execution order. Amounts are written with the
//! full precision of the plan, without a currency symbol.

use std::io::Write;

use crate::display::AccountNames;
use crate::error::BalanceResult;
use crate::services::BalanceReport;

/// Export the transfers of a report to CSV
pub fn export_transfers_csv<W: Write>(
    report: &BalanceReport,
    names: &AccountNames,
    writer: W,
) -> BalanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Step",
        "Budget Month",
        "From ID",
        "From",
        "To ID",
        "To",
        "Amount",
    ])?;

    let month = report.budget.month.to_string();
    for (index, transfer) in report.transfers.iter().enumerate() {
        let from = transfer.from_account_id();
        let to = transfer.to_account_id();
        csv_writer.write_record([
            (index + 1).to_string(),
            month.clone(),
            from.as_uuid().to_string(),
            names.name(from),
            to.as_uuid().to_string(),
            names.name(to),
            transfer.amount().amount().to_string(),
        ])?;
    }

    csv_writer.flush()?;
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
    fn test_csv_export() {
        let main = AccountId::new();
        let rent = AccountId::new();
        let mut snapshot = BudgetSnapshot::new(BudgetMonth::new(2025, 1).unwrap())
            .with_account(main, "Main, Joint")
            .with_account(rent, "Rent");
        snapshot.push(
            LineItemKind::Income,
            LineItem::new(main, Money::new(dec!(1000.33))),
        );
        snapshot.push(
            LineItemKind::Expense,
            LineItem::new(rent, Money::new(dec!(1000.33))),
        );

        let settings = Settings::default();
        let report = BalancingService::new(&settings).balance(&snapshot).unwrap();

        let mut buffer = Vec::new();
        export_transfers_csv(&report, &AccountNames::from_snapshot(&snapshot), &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Step,Budget Month,From ID"));
        assert!(lines[1].starts_with("1,2025-01,"));
        assert!(lines[1].contains("\"Main, Joint\""));
        assert!(lines[1].ends_with(",Rent,1000.33"));
    }

    #[test]
    fn test_csv_export_empty_plan() {
        let snapshot = BudgetSnapshot::new(BudgetMonth::new(2025, 1).unwrap());
        let settings = Settings::default();
        let report = BalancingService::new(&settings).balance(&snapshot).unwrap();

        let mut buffer = Vec::new();
        export_transfers_csv(&report, &AccountNames::default(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
