//! CLI command handler for balance checks
//!
//! Prints a summary of the snapshot and reports whether it balances, so
//! scripts can gate on the exit status.

use super::open_snapshot;
use crate::config::{BalancePaths, Settings};
use crate::display::{format_report_summary, AccountNames};
use crate::error::BalanceResult;
use crate::services::BalancingService;

/// Handle the check command
///
/// Returns `Ok(false)` when the budget is valid but does not balance.
pub fn handle_check_command(
    paths: &BalancePaths,
    settings: &Settings,
    snapshot: &str,
) -> BalanceResult<bool> {
    let snapshot = open_snapshot(paths, snapshot)?;

    // The summary is printed either way; the caller decides the exit status.
    let settings = Settings {
        fail_on_unbalanced: false,
        ..settings.clone()
    };
    let report = BalancingService::new(&settings).balance(&snapshot)?;
    let names = AccountNames::from_snapshot(&snapshot);

    print!(
        "{}",
        format_report_summary(&report, &names, &settings.currency_symbol)
    );

    Ok(report.is_balanced())
}
