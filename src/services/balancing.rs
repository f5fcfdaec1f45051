//! Balancing service
//!
//! Runs the whole pipeline for one budget snapshot: validation, net
//! positions, greedy matching, and a replay of the result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use super::net_position::compute_net_positions;
use super::transfer::compute_transfers;
use super::verification::{total_deficit, total_surplus, verify_plan};
use crate::config::Settings;
use crate::error::{BalanceError, BalanceResult};
use crate::models::{AccountNetPosition, BudgetInfo, BudgetSnapshot, Money, TransferPlan};

/// Service for balancing a budget snapshot
pub struct BalancingService<'a> {
    settings: &'a Settings,
}

/// Everything computed for one budget
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub budget: BudgetInfo,
    /// Net position of every account the budget touches, by account ID
    pub positions: Vec<AccountNetPosition>,
    /// Transfers in the order they must be executed
    pub transfers: Vec<TransferPlan>,
    /// Accounts the transfers could not settle
    pub unmatched: Vec<AccountNetPosition>,
    pub total_surplus: Money,
    pub total_deficit: Money,
    pub generated_at: DateTime<Utc>,
}

impl BalanceReport {
    /// True when every account ends at zero after the transfers
    pub fn is_balanced(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// Sum of all transfer amounts
    pub fn total_transferred(&self) -> Money {
        self.transfers.iter().map(|t| t.amount()).sum()
    }
}

impl<'a> BalancingService<'a> {
    /// Create a new balancing service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Balance one budget snapshot
    ///
    /// Fails on invalid snapshots, and on unbalanced ones when
    /// `fail_on_unbalanced` is set.
    pub fn balance(&self, snapshot: &BudgetSnapshot) -> BalanceResult<BalanceReport> {
        let span = info_span!(
            "balance_budget",
            budget = %snapshot.budget.id,
            month = %snapshot.budget.month
        );
        let _guard = span.enter();

        snapshot
            .validate()
            .map_err(|e| BalanceError::Validation(e.to_string()))?;

        let positions =
            compute_net_positions(&snapshot.income, &snapshot.expenses, &snapshot.savings);
        let transfers = compute_transfers(&positions);

        for transfer in &transfers {
            debug!(
                from = %transfer.from_account_id(),
                to = %transfer.to_account_id(),
                amount = %transfer.amount(),
                "planned transfer"
            );
        }

        let check = verify_plan(&positions, &transfers);
        let surplus = total_surplus(&positions);
        let deficit = total_deficit(&positions);

        debug!(
            transferred = %check.total_transferred,
            surplus = %surplus,
            deficit = %deficit,
            "replayed transfer plan"
        );

        if !check.is_balanced() {
            warn!(
                unmatched_accounts = check.residuals.len(),
                residual_surplus = %check.residual_surplus(),
                residual_deficit = %check.residual_deficit(),
                "budget does not balance"
            );
            if self.settings.fail_on_unbalanced {
                return Err(BalanceError::Unbalanced {
                    surplus: check.residual_surplus(),
                    deficit: check.residual_deficit(),
                });
            }
        }

        info!(
            accounts = positions.len(),
            transfers = transfers.len(),
            "balanced budget"
        );

        Ok(BalanceReport {
            budget: snapshot.budget.clone(),
            positions,
            transfers,
            unmatched: check.residuals,
            total_surplus: surplus,
            total_deficit: deficit,
            generated_at: Utc::now(),
        })
    }
}
