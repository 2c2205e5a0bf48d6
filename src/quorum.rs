multiversx_sc::imports!();

use crate::{BPS_DENOMINATOR, QUORUM_BPS};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum QuorumDecision {
    Undecided,
    /// "For" side holds at least the quorum share.
    Approved,
    /// "Against" side holds at least the quorum share.
    Rejected,
}

/// Share of `total` held by `side`, in basis points (floored).
pub fn share_bps<M: ManagedTypeApi>(side: &BigUint<M>, total: &BigUint<M>) -> BigUint<M> {
    if total == &0u64 {
        return BigUint::zero();
    }
    (side * BPS_DENOMINATOR) / total
}

/// Decides a proposal from its current totals. "For" is checked first
/// and wins if both sides somehow clear the threshold.
pub fn resolve<M: ManagedTypeApi>(stake_for: &BigUint<M>, stake_against: &BigUint<M>) -> QuorumDecision {
    let total = stake_for + stake_against;
    if total == 0u64 {
        return QuorumDecision::Undecided;
    }

    if share_bps(stake_for, &total) >= QUORUM_BPS {
        return QuorumDecision::Approved;
    }
    if share_bps(stake_against, &total) >= QUORUM_BPS {
        return QuorumDecision::Rejected;
    }
    QuorumDecision::Undecided
}
