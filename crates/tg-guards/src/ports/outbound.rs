//! # Driven Ports (Outbound)
//!
//! Interfaces the guards depend on. Pure reads are sync; the freeze flag
//! and its transition timestamp come from whatever freeze-voting apparatus
//! the DAO runs, behind this trait.

use crate::events::GuardEvent;
use tg_primitives::value_objects::Address;

// =============================================================================
// FREEZABLE
// =============================================================================

/// Freeze state of the DAO: a kill-switch flag plus the timestamp of the
/// most recent freeze transition.
pub trait Freezable: Send + Sync {
    /// Whether the DAO is currently frozen.
    fn is_frozen(&self) -> bool;

    /// Timestamp of the most recent freeze transition (0 = never frozen).
    /// Unfreezing does not reset this.
    fn last_freeze_time(&self) -> u64;

    /// Address of the freeze authority, for event attribution.
    fn address(&self) -> Address;
}

impl<T: Freezable + ?Sized> Freezable for std::sync::Arc<T> {
    fn is_frozen(&self) -> bool {
        (**self).is_frozen()
    }

    fn last_freeze_time(&self) -> u64 {
        (**self).last_freeze_time()
    }

    fn address(&self) -> Address {
        (**self).address()
    }
}

// =============================================================================
// EVENT PUBLISHER
// =============================================================================

/// Sink for guard events, the contract of record for indexers.
pub trait GuardEventPublisher: Send + Sync {
    /// Publishes one event.
    fn publish(&self, event: GuardEvent);
}

impl<T: GuardEventPublisher + ?Sized> GuardEventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: GuardEvent) {
        (**self).publish(event);
    }
}
