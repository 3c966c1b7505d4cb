//! # Error Types
//!
//! All error types for the proposal governor.
//!
//! Taxonomy: validation errors are fatal to the call and fixed by the
//! caller; integrity errors signal tampering or a bug and are never
//! coerced; timing errors are recoverable by waiting and retrying;
//! external failures abort the batch atomically.

use crate::domain::entities::ProposalState;
use tg_primitives::ports::ExecutorError;
use tg_primitives::value_objects::{Address, Hash};
use thiserror::Error;

// =============================================================================
// STRATEGY ERRORS
// =============================================================================

/// Failure while consulting the voting strategy collaborator.
#[derive(Debug, Error, Clone)]
pub enum StrategyError {
    /// The strategy has no record of the proposal.
    #[error("strategy has no record of proposal {0}")]
    UnknownProposal(u64),

    /// The strategy is unreachable.
    #[error("voting strategy unavailable")]
    Unavailable,

    /// Strategy-internal failure.
    #[error("strategy error: {0}")]
    Other(String),
}

// =============================================================================
// GOVERNOR ERRORS
// =============================================================================

/// Errors from proposal submission, state derivation, and execution.
#[derive(Debug, Error, Clone)]
pub enum GovernorError {
    /// Caller failed the strategy's proposer check.
    #[error("invalid proposer: {proposer:?}")]
    InvalidProposer {
        /// Rejected proposer.
        proposer: Address,
    },

    /// Proposal id outside `[0, total)`.
    #[error("invalid proposal: id {id} >= total {total}")]
    InvalidProposal {
        /// Requested id.
        id: u64,
        /// Current proposal count.
        total: u64,
    },

    /// Empty batch, or batch extends past the last pending transaction.
    /// Over-execution is rejected wholesale, never truncated.
    #[error("invalid transaction batch: {batch_len} submitted, {remaining} pending")]
    InvalidTxs {
        /// Transactions in the rejected batch.
        batch_len: usize,
        /// Transactions still pending on the proposal.
        remaining: usize,
    },

    /// Attempt to install a zero-address strategy.
    #[error("invalid strategy: zero address")]
    InvalidStrategy,

    /// Proposal is not in the execution window.
    #[error("proposal {id} not executable: state is {state:?}")]
    ProposalNotExecutable {
        /// Proposal id.
        id: u64,
        /// State observed at check time.
        state: ProposalState,
    },

    /// Another execution call on this proposal is in flight. Overlapping
    /// callers are turned away rather than queued; retry once the
    /// in-flight call settles.
    #[error("proposal {id} is already executing")]
    ExecutionInProgress {
        /// Proposal id.
        id: u64,
    },

    /// Submitted transaction does not hash to the recorded slot.
    /// Enforces exact order: no skip, reorder, or substitute.
    #[error("invalid tx hash at index {index}: expected {expected}, got {actual}")]
    InvalidTxHash {
        /// Slot index within the proposal.
        index: usize,
        /// Hash recorded at submission.
        expected: Hash,
        /// Hash of the transaction actually submitted.
        actual: Hash,
    },

    /// Downstream execution reverted; the whole call is rolled back.
    #[error("transaction {index} failed during execution")]
    TxFailed {
        /// Slot index of the failed transaction.
        index: usize,
    },

    /// Caller is not the governor owner.
    #[error("unauthorized: caller {caller:?} is not the owner")]
    Unauthorized {
        /// Rejected caller.
        caller: Address,
    },

    /// Caller is not the pending owner.
    #[error("no pending ownership transfer for caller {caller:?}")]
    NotPendingOwner {
        /// Rejected caller.
        caller: Address,
    },

    /// Voting strategy collaborator failed.
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// Transaction executor collaborator failed before running the call.
    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

// =============================================================================
// TESTS
// =============================================================================
