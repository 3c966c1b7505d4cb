//! # Core Domain Entities
//!
//! Proposal records and governor configuration.

use crate::ports::outbound::VotingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tg_primitives::value_objects::{Address, Hash};
use tokio::sync::Mutex;

// =============================================================================
// PROPOSAL STATE
// =============================================================================

/// Derived lifecycle state of a proposal.
///
/// Never stored: recomputed fresh on every query from elapsed time, the
/// strategy's verdict, and execution progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Voting window still open.
    Active,
    /// Voting closed without passing. Terminal.
    Failed,
    /// Every transaction executed. Terminal.
    Executed,
    /// Passed, waiting out the timelock.
    Timelocked,
    /// Inside the execution window.
    Executable,
    /// Execution window closed with work pending. Terminal.
    Expired,
}

impl ProposalState {
    /// Terminal states never transition again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Executed | Self::Expired)
    }
}

// =============================================================================
// PROPOSAL
// =============================================================================

/// One governance decision: an ordered transaction batch plus a snapshot
/// of the governor defaults taken at submission time.
///
/// `strategy`, `timelock_period`, and `execution_period` are frozen here;
/// later changes to the governor defaults never reach an existing
/// proposal. `tx_hashes` is fixed at creation; the only mutable field is
/// `execution_counter`, which is increment-only.
#[derive(Clone)]
pub struct Proposal {
    /// Strategy snapshot taken at submission.
    pub strategy: Arc<dyn VotingStrategy>,
    /// Hash of each transaction, in execution order. Fixed at creation.
    pub tx_hashes: Vec<Hash>,
    /// Timelock period snapshot (seconds).
    pub timelock_period: u64,
    /// Execution period snapshot (seconds).
    pub execution_period: u64,
    /// Transactions executed so far. Monotone, never exceeds
    /// `tx_hashes.len()`.
    pub execution_counter: usize,
    /// Serializes execution calls on this proposal. Cloned records share
    /// the same lock, so at most one `execute_proposal` call can move the
    /// counter at a time; overlapping callers (reentrant ones included)
    /// are turned away instead of queued, which keeps a callback that
    /// re-enters mid-batch from deadlocking.
    pub execution_lock: Arc<Mutex<()>>,
}

impl Proposal {
    /// Transactions not yet executed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tx_hashes.len().saturating_sub(self.execution_counter)
    }

    /// True once every transaction has executed.
    #[must_use]
    pub fn fully_executed(&self) -> bool {
        self.execution_counter == self.tx_hashes.len()
    }
}

impl fmt::Debug for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proposal")
            .field("strategy", &self.strategy.address())
            .field("tx_hashes", &self.tx_hashes.len())
            .field("timelock_period", &self.timelock_period)
            .field("execution_period", &self.execution_period)
            .field("execution_counter", &self.execution_counter)
            .finish()
    }
}

/// Serializable snapshot of a proposal for read accessors and indexers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    /// Address of the snapshotted strategy.
    pub strategy: Address,
    /// Recorded transaction hashes.
    pub tx_hashes: Vec<Hash>,
    /// Timelock period snapshot (seconds).
    pub timelock_period: u64,
    /// Execution period snapshot (seconds).
    pub execution_period: u64,
    /// Transactions executed so far.
    pub execution_counter: usize,
}

impl From<&Proposal> for ProposalView {
    fn from(p: &Proposal) -> Self {
        Self {
            strategy: p.strategy.address(),
            tx_hashes: p.tx_hashes.clone(),
            timelock_period: p.timelock_period,
            execution_period: p.execution_period,
            execution_counter: p.execution_counter,
        }
    }
}

// =============================================================================
// GOVERNOR CONFIG
// =============================================================================

/// Mutable governor defaults. Read at submission time to build each
/// proposal's snapshot, then never consulted again for that proposal.
#[derive(Clone)]
pub struct GovernorConfig {
    /// Current default strategy.
    pub strategy: Arc<dyn VotingStrategy>,
    /// Current default timelock period (seconds).
    pub timelock_period: u64,
    /// Current default execution period (seconds).
    pub execution_period: u64,
}

impl fmt::Debug for GovernorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GovernorConfig")
            .field("strategy", &self.strategy.address())
            .field("timelock_period", &self.timelock_period)
            .field("execution_period", &self.execution_period)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
