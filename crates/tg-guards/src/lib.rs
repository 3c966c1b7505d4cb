//! # Transaction Guards
//!
//! Pre-execution guards for a guarded treasury executor: a signature-hash
//! timelock with freeze invalidation, and a bare freeze kill switch.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Records are write-once, even after expiry | `service.rs` - `timelock_transaction` existence check |
//! | INVARIANT-2 | A record predating the latest freeze never executes | `domain/services.rs` - `check_record()` ladder |
//! | INVARIANT-3 | Terminal record states never transition | `domain/services.rs` - `derive_record_state()` |
//!
//! ## Record Lifecycle
//!
//! ```text
//! timelock_transaction ──▶ Pending ──▶ Ready ──▶ Expired   (terminal)
//!                             │          │
//!                             └──────────┴──▶ FrozenInvalid (terminal)
//! ```
//!
//! State is derived fresh on every check from the recorded timestamp, the
//! live periods, and the freeze state read at check time; nothing is
//! cached.
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Freeze authority | `Freezable` | Frozen flag + last freeze transition |
//! | Treasury executor | `TransactionExecutor` | Canonical hash-data + signature verification |
//! | Chain host | `ChainEnv` | Block time, read fresh per call |
//!
//! ## Usage Example
//!
//! ```ignore
//! use tg_guards::prelude::*;
//!
//! guard.timelock_transaction(caller, &params, &signatures, nonce).await?;
//! // ... delay elapses ...
//! guard.check_transaction(&params, &signatures).await?;
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
    pub use crate::adapters::{InMemoryGuardEventLog, ManualFreeze};
    pub use crate::domain::entities::{FreezeView, RecordState};
    pub use crate::domain::services::{check_record, derive_record_state};
    pub use crate::errors::GuardError;
    pub use crate::events::GuardEvent;
    pub use crate::ports::inbound::TransactionGuard;
    pub use crate::ports::outbound::{Freezable, GuardEventPublisher};
    pub use crate::service::{SimpleFreezeGuard, TimelockFreezeGuard};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
