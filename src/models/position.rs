//! Net position of an account within one budget

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Classification of a net position, derived from the sign of its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    /// More came in than went out; this account sends money
    Surplus,
    /// More went out than came in; this account receives money
    Deficit,
    /// Nothing to move
    Balanced,
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "Surplus"),
            Self::Deficit => write!(f, "Deficit"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Signed balance of income minus expenses minus savings for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNetPosition {
    pub account_id: AccountId,
    pub net_amount: Money,
}

impl AccountNetPosition {
    /// Create a new net position
    pub fn new(account_id: AccountId, net_amount: Money) -> Self {
        Self {
            account_id,
            net_amount,
        }
    }

    /// Classify this position by the sign of its amount
    pub fn kind(&self) -> PositionKind {
        if self.net_amount.is_positive() {
            PositionKind::Surplus
        } else if self.net_amount.is_negative() {
            PositionKind::Deficit
        } else {
            PositionKind::Balanced
        }
    }

    pub fn is_surplus(&self) -> bool {
        self.kind() == PositionKind::Surplus
    }

    pub fn is_deficit(&self) -> bool {
        self.kind() == PositionKind::Deficit
    }

    pub fn is_balanced(&self) -> bool {
        self.kind() == PositionKind::Balanced
    }

    /// Absolute size of the position
    pub fn magnitude(&self) -> Money {
        self.net_amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classification() {
        let id = AccountId::new();
        assert_eq!(
            AccountNetPosition::new(id, Money::new(dec!(0.01))).kind(),
            PositionKind::Surplus
        );
        assert_eq!(
            AccountNetPosition::new(id, Money::new(dec!(-0.01))).kind(),
            PositionKind::Deficit
        );
        assert!(AccountNetPosition::new(id, Money::new(dec!(0.00))).is_balanced());
    }

    #[test]
    fn test_magnitude() {
        let position = AccountNetPosition::new(AccountId::new(), Money::new(dec!(-300)));
        assert!(position.is_deficit());
        assert_eq!(position.magnitude(), Money::new(dec!(300)));
    }
}
