//! Service layer for envelope-balance
//!
//! The two pure stages of the engine, [`compute_net_positions`] and
//! [`compute_transfers`], plus plan verification and the service that runs
//! them for a whole budget snapshot.

pub mod balancing;
pub mod net_position;
pub mod transfer;
pub mod verification;

pub use balancing::{BalanceReport, BalancingService};
pub use net_position::compute_net_positions;
pub use transfer::compute_transfers;
pub use verification::{total_deficit, total_surplus, verify_plan, PlanCheck};
