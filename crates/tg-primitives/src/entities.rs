//! # Shared Entities
//!
//! The transaction data model shared by the governor and the guards.

use crate::value_objects::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// OPERATION
// =============================================================================

/// Call mode for a transaction.
///
/// `DelegateCall` runs the target's code in the caller's storage context.
/// The low-level semantics belong to the `TransactionExecutor` collaborator;
/// here the variant only has to survive hashing and dispatch intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    /// Ordinary external call.
    #[default]
    Call,
    /// Delegate-style call in the caller's context.
    DelegateCall,
}

impl Operation {
    /// Wire encoding used by the hash protocol (0 = call, 1 = delegatecall).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Call => 0,
            Self::DelegateCall => 1,
        }
    }
}

// =============================================================================
// TRANSACTION
// =============================================================================

/// One atomic call descriptor. Immutable once hashed.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Call target.
    pub to: Address,
    /// Value transferred (wei).
    pub value: U256,
    /// Calldata.
    pub data: Bytes,
    /// Call mode.
    pub operation: Operation,
}

impl Transaction {
    /// Creates a new transaction descriptor.
    #[must_use]
    pub fn new(to: Address, value: U256, data: Bytes, operation: Operation) -> Self {
        Self {
            to,
            value,
            data,
            operation,
        }
    }
}

// =============================================================================
// EXECUTOR CALL PARAMETERS
// =============================================================================

/// Full parameter set of a guarded multisig execution.
///
/// `encode_transaction_data` consumes all of these; the guard's
/// `check_transaction` hook receives them too but only consults the
/// signature bytes (content binding happened at timelock time).
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecTransactionParams {
    /// Call target.
    pub to: Address,
    /// Value transferred (wei).
    pub value: U256,
    /// Calldata.
    pub data: Bytes,
    /// Call mode.
    pub operation: Operation,
    /// Gas forwarded to the inner call.
    pub safe_tx_gas: U256,
    /// Gas reserved for bookkeeping outside the inner call.
    pub base_gas: U256,
    /// Gas price used for the refund calculation.
    pub gas_price: U256,
    /// Token used for the refund (zero address = native).
    pub gas_token: Address,
    /// Refund recipient (zero address = tx origin).
    pub refund_receiver: Address,
}

// =============================================================================
// TESTS
// =============================================================================
