//! # Error Types
//!
//! All error types for the guard layer.
//!
//! Timing errors (`NotTimelocked`, `Timelocked`, `Expired`) are recoverable
//! by waiting or re-timelocking; security errors (`TimelockedBeforeFreeze`,
//! `DaoFrozen`) are permanent or freeze-duration blocks; integrity errors
//! (`AlreadyTimelocked`) signal a duplicate or tampering attempt.

use tg_primitives::ports::SignatureError;
use tg_primitives::value_objects::Address;
use thiserror::Error;

/// Errors from timelocking and the pre-execution check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// No timelock record exists for this signature set.
    #[error("transaction not timelocked")]
    NotTimelocked,

    /// The timelock has not elapsed yet.
    #[error("transaction timelocked until {ready_at}")]
    Timelocked {
        /// First second at which execution is permitted.
        ready_at: u64,
    },

    /// The execution window has closed. A fresh signature set with a new
    /// timelock is the only way forward.
    #[error("execution window closed at {expired_at}")]
    Expired {
        /// Last second at which execution was permitted.
        expired_at: u64,
    },

    /// The record predates the most recent freeze. Permanent: unfreezing
    /// never revives it, and the record is write-once.
    #[error("transaction timelocked before the most recent freeze")]
    TimelockedBeforeFreeze,

    /// The treasury is frozen.
    #[error("DAO is frozen")]
    DaoFrozen,

    /// This exact signature set already has a record. Records are
    /// write-once, regardless of elapsed time.
    #[error("signature set already timelocked")]
    AlreadyTimelocked,

    /// Caller is not the guard owner.
    #[error("unauthorized: caller {caller:?} is not the owner")]
    Unauthorized {
        /// Rejected caller.
        caller: Address,
    },

    /// Caller is not the pending owner.
    #[error("no pending ownership transfer for caller {caller:?}")]
    NotPendingOwner {
        /// Rejected caller.
        caller: Address,
    },

    /// The executor rejected the signature set.
    #[error(transparent)]
    Signature(#[from] SignatureError),
}

// =============================================================================
// TESTS
// =============================================================================
