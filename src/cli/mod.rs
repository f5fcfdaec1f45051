//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the balancing service.

pub mod check;
pub mod config;
pub mod plan;
pub mod positions;

use crate::config::BalancePaths;
use crate::error::BalanceResult;
use crate::models::BudgetSnapshot;
use crate::storage::load_snapshot;

pub use check::handle_check_command;
pub use config::handle_config_command;
pub use plan::handle_plan_command;
pub use positions::handle_positions_command;

/// Resolve a snapshot argument against the data directory and load it
fn open_snapshot(paths: &BalancePaths, snapshot: &str) -> BalanceResult<BudgetSnapshot> {
    load_snapshot(paths.resolve_snapshot(snapshot))
}
