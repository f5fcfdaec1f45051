//! Transfer plan verification
//!
//! Replays a transfer sequence, in order, over the net positions it was
//! computed from. For a budget whose income covers its expenses and savings
//! exactly, every account ends at zero; otherwise the residual accounts are
//! what the wider system still has to reconcile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{AccountId, AccountNetPosition, Money, TransferPlan};

/// Outcome of replaying a transfer plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCheck {
    /// Accounts left with a non-zero position after the replay, by account ID
    pub residuals: Vec<AccountNetPosition>,
    /// Sum of all transfer amounts
    pub total_transferred: Money,
}

impl PlanCheck {
    /// True when the replay leaves every account at exactly zero
    pub fn is_balanced(&self) -> bool {
        self.residuals.is_empty()
    }

    /// Surplus left over after the replay
    pub fn residual_surplus(&self) -> Money {
        self.residuals
            .iter()
            .filter(|p| p.is_surplus())
            .map(|p| p.net_amount)
            .sum()
    }

    /// Deficit left over after the replay, as a positive amount
    pub fn residual_deficit(&self) -> Money {
        self.residuals
            .iter()
            .filter(|p| p.is_deficit())
            .map(|p| p.magnitude())
            .sum()
    }
}

/// Sum of all positive net positions
pub fn total_surplus(positions: &[AccountNetPosition]) -> Money {
    positions
        .iter()
        .filter(|p| p.is_surplus())
        .map(|p| p.net_amount)
        .sum()
}

/// Sum of all negative net positions, as a positive amount
pub fn total_deficit(positions: &[AccountNetPosition]) -> Money {
    positions
        .iter()
        .filter(|p| p.is_deficit())
        .map(|p| p.magnitude())
        .sum()
}

/// Replay `transfers` over `positions` and report what is left
pub fn verify_plan(positions: &[AccountNetPosition], transfers: &[TransferPlan]) -> PlanCheck {
    let mut balances: BTreeMap<AccountId, Money> = positions
        .iter()
        .map(|p| (p.account_id, p.net_amount))
        .collect();

    for transfer in transfers {
        *balances.entry(transfer.from_account_id()).or_default() -= transfer.amount();
        *balances.entry(transfer.to_account_id()).or_default() += transfer.amount();
    }

    let residuals = balances
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(account_id, amount)| AccountNetPosition::new(account_id, amount))
        .collect();

    PlanCheck {
        residuals,
        total_transferred: transfers.iter().map(|t| t.amount()).sum(),
    }
}
