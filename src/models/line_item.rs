//! Budget line items
//!
//! A line item is one income, expense, or savings entry of a budget, reduced
//! to the account it touches and the amount involved. Which collection it
//! came from decides the sign of its contribution to the account's net
//! position.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// The kind of budget entry a line item was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    /// Money earned into the account
    Income,
    /// Money spent from the account
    Expense,
    /// Money set aside from the account
    Savings,
}

impl LineItemKind {
    /// Signed contribution of an amount of this kind to a net position
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense | Self::Savings => -amount,
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// One income, expense, or savings entry tied to an account
///
/// Both `account_id` and `amount` are required when deserializing; a missing
/// field fails the parse rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub account_id: AccountId,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl LineItem {
    /// Create a new line item
    pub fn new(account_id: AccountId, amount: Money) -> Self {
        Self {
            account_id,
            amount,
            description: String::new(),
        }
    }
}
