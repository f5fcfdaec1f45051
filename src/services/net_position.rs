//! Net position calculator
//!
//! Reduces a budget's income, expense, and savings line items to one signed
//! balance per account: `net = income - expenses - savings`.

use std::collections::BTreeMap;

use crate::models::{AccountNetPosition, AccountId, LineItem, LineItemKind, Money};

/// Compute the net position of every account referenced by any line item
///
/// Accounts whose contributions cancel out are still reported, with a zero
/// amount. The result is ordered by account ID; callers must not rely on
/// that order for anything but reproducible output.
///
/// # Panics
///
/// Every account's running total must stay within the range of
/// [`rust_decimal::Decimal`]. [`BudgetSnapshot::validate`] rejects inputs
/// that would leave it, and the balancing service validates first.
///
/// [`BudgetSnapshot::validate`]: crate::models::BudgetSnapshot::validate
pub fn compute_net_positions(
    income: &[LineItem],
    expenses: &[LineItem],
    savings: &[LineItem],
) -> Vec<AccountNetPosition> {
    let mut totals: BTreeMap<AccountId, Money> = BTreeMap::new();

    let contributions = income
        .iter()
        .map(|item| (LineItemKind::Income, item))
        .chain(expenses.iter().map(|item| (LineItemKind::Expense, item)))
        .chain(savings.iter().map(|item| (LineItemKind::Savings, item)));

    for (kind, item) in contributions {
        let signed = kind.signed(item.amount);
        totals
            .entry(item.account_id)
            .and_modify(|total| *total += signed)
            .or_insert(signed);
    }

    totals
        .into_iter()
        .map(|(account_id, net_amount)| AccountNetPosition::new(account_id, net_amount))
        .collect()
}
