//! Core data models for envelope-balance
//!
//! This module contains the value types the balancing engine works with:
//! money, account and budget identifiers, line items, net positions, and
//! the transfer plans it produces.

pub mod ids;
pub mod line_item;
pub mod money;
pub mod month;
pub mod position;
pub mod snapshot;
pub mod transfer;

pub use ids::{AccountId, BudgetId};
pub use line_item::{LineItem, LineItemKind};
pub use money::Money;
pub use month::{BudgetMonth, MonthParseError};
pub use position::{AccountNetPosition, PositionKind};
pub use snapshot::{AccountLabel, BudgetInfo, BudgetSnapshot, SnapshotValidationError};
pub use transfer::{TransferPlan, TransferValidationError};
