//! # Core Domain Entities
//!
//! Per-record state machine of the timelock guard.

use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD STATE
// =============================================================================

/// Lifecycle of one signature-hash timelock record.
///
/// ```text
/// NotTimelocked ──▶ Pending ──▶ Ready ──▶ Expired
///                      │          │
///                      └──────────┴──▶ FrozenInvalid   (terminal)
/// ```
///
/// `FrozenInvalid` is an orthogonal side-state entered when a freeze
/// transition postdates the record; unfreezing never leaves it, and the
/// record is write-once, so it is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordState {
    /// No record for this signature set.
    NotTimelocked,
    /// Timelocked, delay still running.
    Pending,
    /// Inside the execution window.
    Ready,
    /// Window closed unused. Terminal.
    Expired,
    /// Invalidated by a later freeze. Terminal.
    FrozenInvalid,
}

impl RecordState {
    /// Terminal record states never transition again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Expired | Self::FrozenInvalid)
    }
}

// =============================================================================
// FREEZE VIEW
// =============================================================================

/// Freeze state read from the `Freezable` collaborator at check time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreezeView {
    /// Current frozen flag.
    pub frozen: bool,
    /// Timestamp of the most recent freeze transition (0 = never frozen).
    pub last_freeze_time: u64,
}

// =============================================================================
// TESTS
// =============================================================================
