//! Display formatting for terminal output
//!
//! Renders balance reports for people: transfer tables, todo checklists,
//! and per-account net positions.

pub mod position;
pub mod transfer;

use std::collections::HashMap;

use crate::models::{AccountId, BudgetSnapshot};

pub use position::format_position_list;
pub use transfer::{format_report_summary, format_todo_list, format_transfer_table};

/// Resolves account IDs to the names given in a snapshot
#[derive(Debug, Clone, Default)]
pub struct AccountNames {
    names: HashMap<AccountId, String>,
}

impl AccountNames {
    /// Collect names from a snapshot's account directory
    pub fn from_snapshot(snapshot: &BudgetSnapshot) -> Self {
        Self {
            names: snapshot.account_names(),
        }
    }

    /// Name of an account, or its short ID when it has none
    pub fn name(&self, id: AccountId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
