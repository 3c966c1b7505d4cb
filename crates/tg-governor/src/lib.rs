//! # Proposal Governor
//!
//! Turns a strategy-approved proposal into verified, time-delayed,
//! partially-executable transactions.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `execution_counter <= tx_hashes.len()` | `domain/invariants.rs` - `check_counter_bound()` |
//! | INVARIANT-2 | Batches execute a contiguous suffix, never truncated | `service.rs` - `execute_proposal` entry check |
//! | INVARIANT-3 | Terminal states never transition | `domain/services.rs` - `derive_proposal_state()` ladder |
//!
//! ## Lifecycle
//!
//! ```text
//! submit_proposal ──▶ Active ──▶ Failed            (terminal)
//!                        │
//!                        └─────▶ Timelocked ──▶ Executable ──▶ Executed (terminal)
//!                                                     │
//!                                                     └──▶ Expired  (terminal)
//! ```
//!
//! State is derived fresh on every query from elapsed time, the strategy's
//! verdict, and execution progress; nothing is cached.
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Voting strategy | `VotingStrategy` | Proposer eligibility, voting window, verdict |
//! | Treasury executor | `TransactionExecutor` | Low-level call execution |
//! | Chain host | `ChainEnv` | Chain id + block time, read fresh per call |
//!
//! ## Usage Example
//!
//! ```ignore
//! use tg_governor::prelude::*;
//!
//! let id = governor
//!     .submit_proposal(proposer, txs, meta, adapter, adapter_data)
//!     .await?;
//! // ... voting, timelock ...
//! governor.execute_proposal(id, txs).await?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::InMemoryEventLog;
    pub use crate::domain::entities::{GovernorConfig, Proposal, ProposalState, ProposalView};
    pub use crate::domain::invariants::{
        check_batch_extent, check_counter_bound, check_terminal_stability, InvariantViolation,
    };
    pub use crate::domain::services::derive_proposal_state;
    pub use crate::errors::{GovernorError, StrategyError};
    pub use crate::events::GovernorEvent;
    pub use crate::ports::inbound::ProposalGovernorApi;
    pub use crate::ports::outbound::{EventPublisher, VotingStrategy};
    pub use crate::service::ProposalGovernorService;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
