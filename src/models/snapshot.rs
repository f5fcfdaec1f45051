//! Budget snapshot model
//!
//! A snapshot is the fully materialized input for balancing one budget: its
//! income, expense, and savings line items plus an optional directory of
//! account names used when rendering the result.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

use super::ids::{AccountId, BudgetId};
use super::line_item::{LineItem, LineItemKind};
use super::money::Money;
use super::month::BudgetMonth;

/// Validation errors for budget snapshots
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotValidationError {
    #[error("{kind} line item {index} has a negative amount ({amount})")]
    NegativeAmount {
        kind: LineItemKind,
        index: usize,
        amount: Money,
    },
    #[error("{kind} line item {index} references unknown account {account_id}")]
    UnknownAccount {
        kind: LineItemKind,
        index: usize,
        account_id: AccountId,
    },
    #[error("Account {0} is listed more than once")]
    DuplicateAccount(AccountId),
    #[error("{0} exceeds the supported amount range")]
    OutOfRange(String),
}

/// Identity of the budget a snapshot belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInfo {
    #[serde(default)]
    pub id: BudgetId,
    pub month: BudgetMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BudgetInfo {
    /// Create budget info for a month with a fresh ID
    pub fn new(month: BudgetMonth) -> Self {
        Self {
            id: BudgetId::new(),
            month,
            name: None,
        }
    }

    /// Name to show for this budget
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.month.friendly(),
        }
    }
}

/// Bank account label used for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLabel {
    pub id: AccountId,
    pub name: String,
}

impl AccountLabel {
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// All line items of one budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub budget: BudgetInfo,
    #[serde(default)]
    pub accounts: Vec<AccountLabel>,
    #[serde(default)]
    pub income: Vec<LineItem>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    #[serde(default)]
    pub savings: Vec<LineItem>,
}

impl BudgetSnapshot {
    /// Create an empty snapshot for a month
    pub fn new(month: BudgetMonth) -> Self {
        Self {
            budget: BudgetInfo::new(month),
            accounts: Vec::new(),
            income: Vec::new(),
            expenses: Vec::new(),
            savings: Vec::new(),
        }
    }

    /// Register an account name
    pub fn with_account(mut self, id: AccountId, name: impl Into<String>) -> Self {
        self.accounts.push(AccountLabel::new(id, name));
        self
    }

    /// Add a line item of the given kind
    pub fn push(&mut self, kind: LineItemKind, item: LineItem) {
        match kind {
            LineItemKind::Income => self.income.push(item),
            LineItemKind::Expense => self.expenses.push(item),
            LineItemKind::Savings => self.savings.push(item),
        }
    }

    /// Line items of one kind
    pub fn items(&self, kind: LineItemKind) -> &[LineItem] {
        match kind {
            LineItemKind::Income => &self.income,
            LineItemKind::Expense => &self.expenses,
            LineItemKind::Savings => &self.savings,
        }
    }

    /// Total of all line items of one kind
    pub fn total(&self, kind: LineItemKind) -> Money {
        self.items(kind).iter().map(|item| item.amount).sum()
    }

    /// Build a lookup from account ID to display name
    pub fn account_names(&self) -> HashMap<AccountId, String> {
        self.accounts
            .iter()
            .map(|account| (account.id, account.name.clone()))
            .collect()
    }

    /// Validate the snapshot before it reaches the calculator
    ///
    /// Line item amounts must be non-negative; the kind carries the sign.
    /// When an account directory is present, every line item must reference
    /// an account listed in it.
    pub fn validate(&self) -> Result<(), SnapshotValidationError> {
        let mut known = HashSet::new();
        for account in &self.accounts {
            if !known.insert(account.id) {
                return Err(SnapshotValidationError::DuplicateAccount(account.id));
            }
        }

        for kind in [
            LineItemKind::Income,
            LineItemKind::Expense,
            LineItemKind::Savings,
        ] {
            for (index, item) in self.items(kind).iter().enumerate() {
                if item.amount.is_negative() {
                    return Err(SnapshotValidationError::NegativeAmount {
                        kind,
                        index,
                        amount: item.amount,
                    });
                }
                if !known.is_empty() && !known.contains(&item.account_id) {
                    return Err(SnapshotValidationError::UnknownAccount {
                        kind,
                        index,
                        account_id: item.account_id,
                    });
                }
            }
        }

        self.check_ranges()
    }

    /// Reject snapshots whose totals would overflow the decimal type
    ///
    /// Covers the per-kind totals, every account's net position, and the
    /// sums of surpluses and deficits the matcher reports.
    fn check_ranges(&self) -> Result<(), SnapshotValidationError> {
        for kind in [
            LineItemKind::Income,
            LineItemKind::Expense,
            LineItemKind::Savings,
        ] {
            checked_sum(self.items(kind).iter().map(|item| item.amount))
                .ok_or_else(|| SnapshotValidationError::OutOfRange(format!("Total {kind}")))?;
        }

        let mut nets: BTreeMap<AccountId, Money> = BTreeMap::new();
        for kind in [
            LineItemKind::Income,
            LineItemKind::Expense,
            LineItemKind::Savings,
        ] {
            for item in self.items(kind) {
                let net = nets.entry(item.account_id).or_default();
                *net = net.checked_add(kind.signed(item.amount)).ok_or_else(|| {
                    SnapshotValidationError::OutOfRange(format!(
                        "Net position of account {}",
                        item.account_id
                    ))
                })?;
            }
        }

        checked_sum(nets.values().copied().filter(Money::is_positive))
            .ok_or_else(|| SnapshotValidationError::OutOfRange("Total surplus".to_string()))?;
        checked_sum(nets.values().copied().filter(Money::is_negative))
            .ok_or_else(|| SnapshotValidationError::OutOfRange("Total deficit".to_string()))?;

        Ok(())
    }
}

fn checked_sum(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.try_fold(Money::zero(), Money::checked_add)
}
