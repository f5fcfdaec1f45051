//! CLI command handler for transfer plans
//!
//! Balances a snapshot and prints the transfers in the requested format.

use std::io::{self, Write};

use super::open_snapshot;
use crate::config::{BalancePaths, OutputFormat, Settings};
use crate::display::{format_todo_list, format_transfer_table, AccountNames};
use crate::error::BalanceResult;
use crate::export::{export_report_json, export_transfers_csv};
use crate::services::BalancingService;

/// Handle the plan command
pub fn handle_plan_command(
    paths: &BalancePaths,
    settings: &Settings,
    snapshot: &str,
    format: Option<OutputFormat>,
    strict: bool,
) -> BalanceResult<()> {
    let snapshot = open_snapshot(paths, snapshot)?;

    let settings = Settings {
        fail_on_unbalanced: settings.fail_on_unbalanced || strict,
        ..settings.clone()
    };
    let report = BalancingService::new(&settings).balance(&snapshot)?;
    let names = AccountNames::from_snapshot(&snapshot);
    let symbol = settings.currency_symbol.as_str();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format.unwrap_or(settings.output_format) {
        OutputFormat::Table => {
            writeln!(
                out,
                "Transfer plan for {} ({})",
                report.budget.display_name(),
                report.budget.month
            )?;
            writeln!(out)?;
            writeln!(out, "{}", format_transfer_table(&report, &names, symbol))?;
            if !report.is_balanced() {
                writeln!(
                    out,
                    "Warning: budget is unbalanced, {} account(s) left unsettled",
                    report.unmatched.len()
                )?;
            }
        }
        OutputFormat::Todo => {
            write!(out, "{}", format_todo_list(&report, &names, symbol))?;
        }
        OutputFormat::Json => export_report_json(&report, &mut out)?,
        OutputFormat::Csv => export_transfers_csv(&report, &names, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
