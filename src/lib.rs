//! envelope-balance - transfer planning for household budgets
//!
//! Given a month's income, expenses and savings allocations, each tied to a
//! bank account, this crate works out each account's net position and a
//! list of account-to-account transfers that brings every account to zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, line items, positions, transfers)
//! - `services`: Net positions, the greedy transfer matcher, and plan checks
//! - `storage`: Loading budget snapshots from JSON or YAML
//! - `config`: Configuration and path management
//! - `display` / `export`: Terminal rendering and CSV/JSON output
//! - `cli`: Handlers behind the `envelope-balance` binary
//! - `logging`: `tracing` subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use envelope_balance::models::{AccountId, LineItem, Money};
//! use envelope_balance::{compute_net_positions, compute_transfers};
//!
//! let checking = AccountId::new();
//! let bills = AccountId::new();
//!
//! let income = vec![LineItem::new(checking, Money::from_scaled(1000, 0))];
//! let expenses = vec![LineItem::new(bills, Money::from_scaled(1000, 0))];
//!
//! let positions = compute_net_positions(&income, &expenses, &[]);
//! let transfers = compute_transfers(&positions);
//!
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].from_account_id(), checking);
//! assert_eq!(transfers[0].to_account_id(), bills);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BalanceError, BalanceResult};
pub use services::{compute_net_positions, compute_transfers, verify_plan, BalancingService};
