//! Greedy transfer matcher
//!
//! Turns a set of account net positions into an ordered list of transfers
//! that brings every account back to zero. At each step the account with
//! the largest surplus pays the account with the largest deficit as much as
//! both can bear, so every step fully discharges at least one of them.
//!
//! The result never exceeds `surplus accounts + deficit accounts - 1`
//! transfers. This is a heuristic: it is not proven to find the global
//! minimum for every surplus/deficit topology.

use std::cmp::Ordering;
use std::collections::binary_heap::{BinaryHeap, PeekMut};

use tracing::trace;

use crate::models::{AccountId, AccountNetPosition, Money, TransferPlan};

/// Working entry of the matcher: how much an account still has to send or
/// receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outstanding {
    magnitude: Money,
    account_id: AccountId,
}

impl Ord for Outstanding {
    /// Larger magnitudes first; equal magnitudes go to the lower account ID
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude
            .cmp(&other.magnitude)
            .then_with(|| other.account_id.cmp(&self.account_id))
    }
}

impl PartialOrd for Outstanding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the transfers that zero out every net position
///
/// Balanced positions are ignored. If total surplus and total deficit differ,
/// the leftover accounts stay unmatched and simply do not appear in the
/// result. The input is only read; matching works on private copies.
pub fn compute_transfers(positions: &[AccountNetPosition]) -> Vec<TransferPlan> {
    let mut surplus = BinaryHeap::new();
    let mut deficit = BinaryHeap::new();

    for position in positions {
        let entry = Outstanding {
            magnitude: position.magnitude(),
            account_id: position.account_id,
        };
        if position.is_surplus() {
            surplus.push(entry);
        } else if position.is_deficit() {
            deficit.push(entry);
        }
    }

    trace!(
        surplus_accounts = surplus.len(),
        deficit_accounts = deficit.len(),
        "matching net positions"
    );

    let mut transfers = Vec::with_capacity((surplus.len() + deficit.len()).saturating_sub(1));

    while let (Some(mut source), Some(mut sink)) = (surplus.peek_mut(), deficit.peek_mut()) {
        let amount = source.magnitude.min(sink.magnitude);
        transfers.push(TransferPlan::matched(
            source.account_id,
            sink.account_id,
            amount,
        ));

        source.magnitude -= amount;
        sink.magnitude -= amount;

        // Entries that still carry a balance are re-sifted when the guard drops.
        if source.magnitude.is_zero() {
            PeekMut::pop(source);
        }
        if sink.magnitude.is_zero() {
            PeekMut::pop(sink);
        }
    }

    transfers
}
