//! # Domain Services
//!
//! Pure evaluation of timelock records. Deterministic, no side effects.
//!
//! The freeze comparison uses only the single latest `last_freeze_time`:
//! sufficient because records are write-once and freeze transitions are
//! monotonic in time. A variant that allowed record updates would need the
//! full freeze history instead.

use crate::domain::entities::{FreezeView, RecordState};
use crate::errors::GuardError;

// =============================================================================
// CHECK LADDER
// =============================================================================

/// The pre-execution check for one record, in mandated order:
///
/// 1. no record → `NotTimelocked`
/// 2. `now < ts + timelock_period` → `Timelocked`
/// 3. `now > ts + timelock_period + execution_period` → `Expired`
/// 4. record predates the latest freeze → `TimelockedBeforeFreeze`
/// 5. currently frozen → `DaoFrozen`
///
/// Step 4 compares against `last_freeze_time` *as it stands now*, not at
/// timelock time, so a record timelocked before any freeze transition can
/// never execute again across unfreeze/re-freeze cycles.
///
/// # Errors
///
/// One of the five ladder failures above; `Ok(())` means the host executor
/// may proceed.
pub fn check_record(
    ts: u64,
    now: u64,
    timelock_period: u64,
    execution_period: u64,
    freeze: FreezeView,
) -> Result<(), GuardError> {
    if ts == 0 {
        return Err(GuardError::NotTimelocked);
    }
    let ready_at = ts.saturating_add(timelock_period);
    if now < ready_at {
        return Err(GuardError::Timelocked { ready_at });
    }
    let expired_at = ready_at.saturating_add(execution_period);
    if now > expired_at {
        return Err(GuardError::Expired { expired_at });
    }
    if freeze.last_freeze_time != 0 && ts < freeze.last_freeze_time {
        return Err(GuardError::TimelockedBeforeFreeze);
    }
    if freeze.frozen {
        return Err(GuardError::DaoFrozen);
    }
    Ok(())
}

// =============================================================================
// STATE VIEW
// =============================================================================

/// Derives the record's state-machine position for read accessors.
///
/// `FrozenInvalid` dominates the timing states: once a later freeze exists
/// the record is dead regardless of where its window sits.
#[must_use]
pub fn derive_record_state(
    ts: u64,
    now: u64,
    timelock_period: u64,
    execution_period: u64,
    last_freeze_time: u64,
) -> RecordState {
    if ts == 0 {
        return RecordState::NotTimelocked;
    }
    if last_freeze_time != 0 && ts < last_freeze_time {
        return RecordState::FrozenInvalid;
    }
    let ready_at = ts.saturating_add(timelock_period);
    if now < ready_at {
        return RecordState::Pending;
    }
    if now <= ready_at.saturating_add(execution_period) {
        return RecordState::Ready;
    }
    RecordState::Expired
}

// =============================================================================
// TESTS
// =============================================================================
