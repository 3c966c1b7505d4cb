//! # Domain Services
//!
//! Pure derivation of proposal state. Deterministic, no side effects.

use crate::domain::entities::ProposalState;

// =============================================================================
// STATE DERIVATION
// =============================================================================

/// Derives the lifecycle state of a proposal.
///
/// Every window boundary is an additive offset from the single
/// `voting_end` anchor, and every comparison is inclusive (`<=`) at both
/// ends. The boundary second itself therefore belongs to the *earlier*
/// window; the off-by-one tests in this module pin that down.
///
/// Decision ladder, in order:
/// 1. `now <= voting_end` → `Active`
/// 2. `!passed` → `Failed`
/// 3. all executed → `Executed`
/// 4. `now <= voting_end + timelock_period` → `Timelocked`
/// 5. `now <= voting_end + timelock_period + execution_period` → `Executable`
/// 6. otherwise → `Expired`
#[must_use]
pub fn derive_proposal_state(
    now: u64,
    voting_end: u64,
    passed: bool,
    execution_counter: usize,
    total_txs: usize,
    timelock_period: u64,
    execution_period: u64,
) -> ProposalState {
    if now <= voting_end {
        return ProposalState::Active;
    }
    if !passed {
        return ProposalState::Failed;
    }
    if execution_counter == total_txs {
        return ProposalState::Executed;
    }
    let timelock_end = voting_end.saturating_add(timelock_period);
    if now <= timelock_end {
        return ProposalState::Timelocked;
    }
    if now <= timelock_end.saturating_add(execution_period) {
        return ProposalState::Executable;
    }
    ProposalState::Expired
}

// =============================================================================
// TESTS
// =============================================================================
