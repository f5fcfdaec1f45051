//! Transfer plan model
//!
//! A transfer plan is a directed instruction to move a strictly positive
//! amount from one account to another. Plans are immutable once built.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::ids::AccountId;
use super::money::Money;

/// Validation errors for transfer plans
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferValidationError {
    #[error("Transfer amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Cannot transfer from an account to itself ({0})")]
    SameAccount(AccountId),
}

/// One money movement between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferPlan {
    from_account_id: AccountId,
    to_account_id: AccountId,
    amount: Money,
}

impl TransferPlan {
    /// Create a transfer plan, rejecting zero, negative, and self transfers
    pub fn new(
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Money,
    ) -> Result<Self, TransferValidationError> {
        if !amount.is_positive() {
            return Err(TransferValidationError::NonPositiveAmount(amount));
        }
        if from_account_id == to_account_id {
            return Err(TransferValidationError::SameAccount(from_account_id));
        }
        Ok(Self {
            from_account_id,
            to_account_id,
            amount,
        })
    }

    /// Build a plan whose invariants the matcher already guarantees
    pub(crate) fn matched(from_account_id: AccountId, to_account_id: AccountId, amount: Money) -> Self {
        debug_assert!(amount.is_positive());
        debug_assert_ne!(from_account_id, to_account_id);
        Self {
            from_account_id,
            to_account_id,
            amount,
        }
    }

    pub fn from_account_id(&self) -> AccountId {
        self.from_account_id
    }

    pub fn to_account_id(&self) -> AccountId {
        self.to_account_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for TransferPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.from_account_id, self.to_account_id, self.amount
        )
    }
}
