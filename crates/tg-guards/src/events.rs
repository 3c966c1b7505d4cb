//! # Event Schema
//!
//! Guard events for off-chain indexers and relayers watching the
//! timelock queue.

use serde::{Deserialize, Serialize};
use tg_primitives::value_objects::{Address, Bytes, Hash};

/// Everything the guard layer announces to the outside world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardEvent {
    /// A signature set was timelocked. Relayers key their execution
    /// schedule off this.
    TransactionTimelocked {
        /// Account that submitted the timelock.
        caller: Address,
        /// Canonical hash of the timelocked transaction.
        tx_hash: Hash,
        /// Raw signature bytes the record is keyed by.
        signatures: Bytes,
    },

    /// Timelock period changed. Applies to existing records immediately.
    TimelockPeriodUpdated {
        /// New period (seconds).
        value: u64,
    },

    /// Execution period changed. Applies to existing records immediately.
    ExecutionPeriodUpdated {
        /// New period (seconds).
        value: u64,
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
