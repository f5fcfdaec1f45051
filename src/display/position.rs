//! Net position display formatting

use super::AccountNames;
use crate::models::AccountNetPosition;

/// Format net positions as an aligned list with a total row
pub fn format_position_list(
    positions: &[AccountNetPosition],
    names: &AccountNames,
    symbol: &str,
) -> String {
    if positions.is_empty() {
        return "No accounts in this budget.".to_string();
    }

    let rows: Vec<(String, String, String)> = positions
        .iter()
        .map(|p| {
            (
                names.name(p.account_id),
                p.kind().to_string(),
                p.net_amount.format_with_symbol(symbol),
            )
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(7).max(7);
    let amount_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(12).max(12);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>amount_width$}\n",
        "Account", "Position", "Net",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:->amount_width$}\n",
        "", "", "",
    ));

    for (name, kind, amount) in &rows {
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {:>amount_width$}\n",
            name, kind, amount,
        ));
    }

    let net: crate::models::Money = positions.iter().map(|p| p.net_amount).sum();
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:->amount_width$}\n",
        "", "", "",
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>amount_width$}\n",
        "TOTAL",
        "",
        net.format_with_symbol(symbol),
    ));

    output
}
