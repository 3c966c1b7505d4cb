//! # Manual Freeze Switch
//!
//! `Freezable` adapter driven by hand. Stands in for the DAO's freeze
//! voting apparatus in tests and in-process hosts: it tracks the flag and
//! the timestamp of the most recent freeze transition, which survives
//! unfreezing.

use crate::ports::outbound::Freezable;
use parking_lot::Mutex;
use tg_primitives::value_objects::Address;

#[derive(Clone, Copy, Debug, Default)]
struct FreezeState {
    frozen: bool,
    last_freeze_time: u64,
}

/// Hand-driven freeze switch.
#[derive(Debug)]
pub struct ManualFreeze {
    address: Address,
    state: Mutex<FreezeState>,
}

impl ManualFreeze {
    /// Creates an unfrozen switch that reports the given address.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: Mutex::new(FreezeState::default()),
        }
    }

    /// Freezes at the given timestamp. Each call is a fresh freeze
    /// transition and moves `last_freeze_time` forward.
    pub fn freeze(&self, at: u64) {
        let mut state = self.state.lock();
        state.frozen = true;
        state.last_freeze_time = at;
    }

    /// Unfreezes. `last_freeze_time` is deliberately left in place.
    pub fn unfreeze(&self) {
        self.state.lock().frozen = false;
    }
}

impl Freezable for ManualFreeze {
    fn is_frozen(&self) -> bool {
        self.state.lock().frozen
    }

    fn last_freeze_time(&self) -> u64 {
        self.state.lock().last_freeze_time
    }

    fn address(&self) -> Address {
        self.address
    }
}

// =============================================================================
// TESTS
// =============================================================================
