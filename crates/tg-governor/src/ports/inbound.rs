//! # Driving Ports (Inbound)
//!
//! The public API of the proposal governor, consumed by relayers and by
//! other subsystems in the workspace.

use crate::domain::entities::{ProposalState, ProposalView};
use crate::errors::GovernorError;
use async_trait::async_trait;
use tg_primitives::entities::Transaction;
use tg_primitives::value_objects::{Address, Bytes, Hash};

/// Proposal lifecycle API.
#[async_trait]
pub trait ProposalGovernorApi: Send + Sync {
    /// Submits a proposal on behalf of `caller`. Returns the new id.
    async fn submit_proposal(
        &self,
        caller: Address,
        transactions: Vec<Transaction>,
        metadata: String,
        adapter: Address,
        adapter_data: Bytes,
    ) -> Result<u64, GovernorError>;

    /// Derives the current state of a proposal. Never cached.
    async fn proposal_state(&self, proposal_id: u64) -> Result<ProposalState, GovernorError>;

    /// Executes a contiguous suffix of a proposal's pending transactions.
    /// All-or-nothing within this call; partial progress happens across
    /// separate calls.
    async fn execute_proposal(
        &self,
        proposal_id: u64,
        transactions: Vec<Transaction>,
    ) -> Result<(), GovernorError>;

    /// Snapshot view of a stored proposal.
    async fn proposal(&self, proposal_id: u64) -> Result<ProposalView, GovernorError>;

    /// Recorded transaction hashes of a proposal.
    async fn proposal_tx_hashes(&self, proposal_id: u64) -> Result<Vec<Hash>, GovernorError>;

    /// Number of proposals ever submitted.
    async fn total_proposal_count(&self) -> u64;
}
