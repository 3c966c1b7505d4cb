//! # Driving Ports (Inbound)
//!
//! The guard hook interface. The host executor calls `check_transaction`
//! immediately before running a guarded transaction and
//! `check_after_execution` immediately after; a guard vetoes by returning
//! an error from the pre-check.

use crate::errors::GuardError;
use async_trait::async_trait;
use tg_primitives::entities::ExecTransactionParams;
use tg_primitives::value_objects::{Bytes, Hash};

/// Pre/post-execution hook of a guarded executor.
#[async_trait]
pub trait TransactionGuard: Send + Sync {
    /// Pre-execution gate. A pure check: no guard state changes here.
    ///
    /// The full parameter set is passed through from the executor; which
    /// parts a guard consults is its own business.
    async fn check_transaction(
        &self,
        params: &ExecTransactionParams,
        signatures: &Bytes,
    ) -> Result<(), GuardError>;

    /// Post-execution notification. No veto power.
    async fn check_after_execution(&self, tx_hash: Hash, success: bool);
}
