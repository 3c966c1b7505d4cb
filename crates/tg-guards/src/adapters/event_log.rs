//! # In-Memory Event Log
//!
//! `GuardEventPublisher` adapter backed by a shared vector.

use crate::events::GuardEvent;
use crate::ports::outbound::GuardEventPublisher;
use parking_lot::Mutex;

/// Append-only in-memory event sink.
#[derive(Debug, Default)]
pub struct InMemoryGuardEventLog {
    events: Mutex<Vec<GuardEvent>>,
}

impl InMemoryGuardEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event published so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<GuardEvent> {
        self.events.lock().clone()
    }

    /// True if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl GuardEventPublisher for InMemoryGuardEventLog {
    fn publish(&self, event: GuardEvent) {
        self.events.lock().push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
