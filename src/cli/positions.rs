//! CLI command handler for net positions

use super::open_snapshot;
use crate::config::{BalancePaths, Settings};
use crate::display::{format_position_list, AccountNames};
use crate::error::{BalanceError, BalanceResult};
use crate::models::LineItemKind;
use crate::services::compute_net_positions;

/// Handle the positions command
pub fn handle_positions_command(
    paths: &BalancePaths,
    settings: &Settings,
    snapshot: &str,
) -> BalanceResult<()> {
    let snapshot = open_snapshot(paths, snapshot)?;
    snapshot
        .validate()
        .map_err(|e| BalanceError::Validation(e.to_string()))?;

    let positions = compute_net_positions(&snapshot.income, &snapshot.expenses, &snapshot.savings);
    let names = AccountNames::from_snapshot(&snapshot);

    println!(
        "Net positions for {} ({})",
        snapshot.budget.display_name(),
        snapshot.budget.month
    );
    println!();
    print!(
        "{}",
        format_position_list(&positions, &names, &settings.currency_symbol)
    );
    println!();
    for kind in [
        LineItemKind::Income,
        LineItemKind::Expense,
        LineItemKind::Savings,
    ] {
        println!(
            "{:<9}{}",
            format!("{}:", kind),
            snapshot.total(kind).format_with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}
