//! # Shared Collaborator Ports
//!
//! Traits for external capabilities consumed by more than one subsystem.
//! Adapters live with the host integration; the governance crates only see
//! these interfaces. Effectful calls are async; pure reads are sync,
//! matching how adapters actually behave.

use crate::entities::{ExecTransactionParams, Operation};
use crate::value_objects::{Address, Bytes, Hash, U256};
use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// TRANSACTION EXECUTOR
// =============================================================================

/// Transport-level failure while reaching the execution primitive.
///
/// Distinct from an inner call that ran and reverted; that case is
/// `Ok(false)` from [`TransactionExecutor::exec`].
#[derive(Debug, Error, Clone)]
pub enum ExecutorError {
    /// The executor rejected the call before running it.
    #[error("executor rejected call to {to:?}: {reason}")]
    Rejected {
        /// Intended call target.
        to: Address,
        /// Executor-supplied reason.
        reason: String,
    },

    /// The executor is unreachable.
    #[error("executor unavailable")]
    Unavailable,
}

/// Signature verification failure, produced by the executor's own
/// verification routine and propagated untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature bytes failed verification against the given hash.
    #[error("invalid signatures: {0}")]
    Invalid(String),

    /// Fewer valid signatures than the executor's threshold.
    #[error("signature threshold not met: {got} of {required}")]
    ThresholdNotMet {
        /// Valid signatures found.
        got: usize,
        /// Signatures required.
        required: usize,
    },
}

/// Low-level execution capability of the treasury.
///
/// Covers the three operations the governance layer needs: running a call,
/// producing the canonical hash-data for a guarded multisig transaction,
/// and verifying a signature blob against a hash.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Executes one call. `Ok(true)` means the inner call succeeded,
    /// `Ok(false)` means it ran and reverted.
    async fn exec(
        &self,
        to: Address,
        value: U256,
        data: &Bytes,
        operation: Operation,
    ) -> Result<bool, ExecutorError>;

    /// Produces the canonical hash-data for a guarded multisig transaction,
    /// binding a timelock record to exact transaction content.
    fn encode_transaction_data(&self, params: &ExecTransactionParams, nonce: u64) -> Bytes;

    /// Verifies a signature blob against a transaction hash. Returns `Err`
    /// on any invalid signature; no partial acceptance.
    fn check_signatures(
        &self,
        hash: Hash,
        data: &Bytes,
        signatures: &Bytes,
    ) -> Result<(), SignatureError>;
}

// =============================================================================
// CHAIN ENVIRONMENT
// =============================================================================

/// Host-chain context: chain id and block time.
///
/// Read fresh on every call; nothing in the governance layer caches either
/// value. Test adapters drive the clock by hand.
pub trait ChainEnv: Send + Sync {
    /// Chain id for domain separation.
    fn chain_id(&self) -> u64;

    /// Current block timestamp (unix seconds).
    fn timestamp(&self) -> u64;
}

/// Convenience impl so services can hold `Arc<dyn ChainEnv>` or a concrete
/// adapter interchangeably.
impl<T: ChainEnv + ?Sized> ChainEnv for std::sync::Arc<T> {
    fn chain_id(&self) -> u64 {
        (**self).chain_id()
    }

    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}

// =============================================================================
// TESTS
// =============================================================================
