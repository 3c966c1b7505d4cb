//! # Event Schema
//!
//! Governor events, the contract of record for off-chain indexers.
//! Serde-derived so adapters can ship them over any transport.

use serde::{Deserialize, Serialize};
use tg_primitives::entities::Transaction;
use tg_primitives::value_objects::{Address, Hash};

/// Everything the governor announces to the outside world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernorEvent {
    /// A proposal was stored and voting opened. Carries the full
    /// transaction batch and metadata so indexers never need a second
    /// lookup.
    ProposalCreated {
        /// Strategy snapshotted into the proposal.
        strategy: Address,
        /// Allocated proposal id.
        proposal_id: u64,
        /// Submitting account.
        proposer: Address,
        /// Full transaction batch, in execution order.
        transactions: Vec<Transaction>,
        /// Free-form metadata for indexers.
        metadata: String,
    },

    /// One `execute_proposal` call completed. Lists the hashes executed
    /// in this call, in order.
    ProposalExecuted {
        /// Proposal id.
        proposal_id: u64,
        /// Hashes executed by this call.
        tx_hashes: Vec<Hash>,
    },

    /// Default timelock period changed.
    TimelockPeriodUpdated {
        /// New default (seconds).
        value: u64,
    },

    /// Default execution period changed.
    ExecutionPeriodUpdated {
        /// New default (seconds).
        value: u64,
    },

    /// Default strategy changed.
    StrategyUpdated {
        /// New strategy address.
        value: Address,
    },

    /// Ownership handshake completed.
    OwnershipTransferred {
        /// New owner.
        new_owner: Address,
    },
}

// =============================================================================
// TESTS
// =============================================================================
