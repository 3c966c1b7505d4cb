//! # Driven Ports (Outbound)
//!
//! Interfaces the governor depends on. Adapters implement these to connect
//! a concrete voting strategy and an event sink; the governor never sees
//! past the trait.

use crate::errors::StrategyError;
use crate::events::GovernorEvent;
use async_trait::async_trait;
use tg_primitives::value_objects::{Address, Bytes};

// =============================================================================
// VOTING STRATEGY
// =============================================================================

/// Voting strategy collaborator.
///
/// Owns proposer eligibility, the voting window, and the pass/fail verdict
/// per proposal. The governor snapshots the strategy handle into each
/// proposal at submission, so a later `update_strategy` never reaches an
/// existing proposal.
#[async_trait]
pub trait VotingStrategy: Send + Sync {
    /// On-chain identity of the strategy, recorded in events and
    /// proposal views.
    fn address(&self) -> Address;

    /// Whether `proposer` may submit a proposal, as judged by the named
    /// proposer adapter with its opaque payload.
    async fn is_proposer(
        &self,
        proposer: Address,
        adapter: Address,
        adapter_data: &Bytes,
    ) -> Result<bool, StrategyError>;

    /// Opens voting for a freshly stored proposal.
    async fn initialize_proposal(&self, proposal_id: u64) -> Result<(), StrategyError>;

    /// `(start, end)` of the proposal's voting window (unix seconds).
    async fn voting_timestamps(&self, proposal_id: u64) -> Result<(u64, u64), StrategyError>;

    /// Whether the proposal passed. Only meaningful after `end`.
    async fn is_passed(&self, proposal_id: u64) -> Result<bool, StrategyError>;
}

// =============================================================================
// EVENT PUBLISHER
// =============================================================================

/// Sink for governor events, the contract of record for indexers.
///
/// Publishing is infallible from the governor's point of view; a lossy
/// sink is the adapter's problem, not a reason to revert governance.
pub trait EventPublisher: Send + Sync {
    /// Publishes one event.
    fn publish(&self, event: GovernorEvent);
}

impl<T: EventPublisher + ?Sized> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: GovernorEvent) {
        (**self).publish(event);
    }
}
