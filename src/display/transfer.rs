//! Transfer plan display formatting
//!
//! Formats the transfers of a balance report as a table or as a checklist
//! of money movements to carry out.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::AccountNames;
use crate::services::BalanceReport;

#[derive(Tabled)]
struct TransferRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the transfers of a report as a table
pub fn format_transfer_table(report: &BalanceReport, names: &AccountNames, symbol: &str) -> String {
    if report.transfers.is_empty() {
        return "No transfers needed.".to_string();
    }

    let rows: Vec<TransferRow> = report
        .transfers
        .iter()
        .enumerate()
        .map(|(index, transfer)| TransferRow {
            step: index + 1,
            from: names.name(transfer.from_account_id()),
            to: names.name(transfer.to_account_id()),
            amount: transfer.amount().format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "Total to move: {}\n",
        report.total_transferred().format_with_symbol(symbol)
    ));
    output
}

/// Format the transfers of a report as a todo checklist
pub fn format_todo_list(report: &BalanceReport, names: &AccountNames, symbol: &str) -> String {
    let mut output = format!("Transfers for {}\n", report.budget.display_name());

    if report.transfers.is_empty() {
        output.push_str("  Nothing to do.\n");
        return output;
    }

    for transfer in &report.transfers {
        output.push_str(&format!(
            "  [ ] Move {} from {} to {}\n",
            transfer.amount().format_with_symbol(symbol),
            names.name(transfer.from_account_id()),
            names.name(transfer.to_account_id()),
        ));
    }
    output
}

/// One-paragraph summary of a report
pub fn format_report_summary(report: &BalanceReport, names: &AccountNames, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {} ({})\n",
        report.budget.display_name(),
        report.budget.month
    ));
    output.push_str(&format!("  Accounts:       {}\n", report.positions.len()));
    output.push_str(&format!("  Transfers:      {}\n", report.transfers.len()));
    output.push_str(&format!(
        "  Total Surplus:  {}\n",
        report.total_surplus.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Deficit:  {}\n",
        report.total_deficit.format_with_symbol(symbol)
    ));

    if report.is_balanced() {
        output.push_str("  Status:         Balanced\n");
    } else {
        output.push_str("  Status:         Unbalanced\n");
        for position in &report.unmatched {
            output.push_str(&format!(
                "    {} left with {}\n",
                names.name(position.account_id),
                position.net_amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}
