//! # Domain Invariants
//!
//! Invariants that MUST hold for every proposal record:
//!
//! - INVARIANT-1: `execution_counter <= tx_hashes.len()` at all times.
//! - INVARIANT-2: a batch executes a contiguous suffix of pending slots;
//!   over-execution is rejected wholesale, never truncated.
//! - INVARIANT-3: terminal states (Failed, Executed, Expired) never
//!   transition again.

use crate::domain::entities::ProposalState;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: counter bound.
#[must_use]
pub fn check_counter_bound(execution_counter: usize, total_txs: usize) -> bool {
    execution_counter <= total_txs
}

/// INVARIANT-2: batch extent. A non-empty batch starting at the counter
/// must fit within the recorded hashes.
#[must_use]
pub fn check_batch_extent(execution_counter: usize, batch_len: usize, total_txs: usize) -> bool {
    batch_len > 0 && execution_counter.saturating_add(batch_len) <= total_txs
}

/// INVARIANT-3: terminal stability. A transition out of a terminal state
/// is a violation; re-observing the same terminal state is fine.
#[must_use]
pub fn check_terminal_stability(previous: ProposalState, next: ProposalState) -> bool {
    !previous.is_terminal() || previous == next
}

/// Checks every proposal invariant at once.
#[must_use]
pub fn check_proposal_invariants(
    execution_counter: usize,
    total_txs: usize,
) -> Result<(), InvariantViolation> {
    if !check_counter_bound(execution_counter, total_txs) {
        return Err(InvariantViolation::CounterExceedsTotal {
            counter: execution_counter,
            total: total_txs,
        });
    }
    Ok(())
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Execution counter ran past the recorded hashes.
    CounterExceedsTotal {
        /// Observed counter.
        counter: usize,
        /// Recorded hash count.
        total: usize,
    },
    /// A terminal state transitioned.
    TerminalStateChanged {
        /// Terminal state previously observed.
        previous: ProposalState,
        /// State observed afterwards.
        next: ProposalState,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CounterExceedsTotal { counter, total } => {
                write!(f, "execution counter {counter} exceeds total {total}")
            }
            Self::TerminalStateChanged { previous, next } => {
                write!(f, "terminal state {previous:?} changed to {next:?}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
