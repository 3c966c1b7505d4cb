//! # In-Memory Event Log
//!
//! `EventPublisher` adapter that appends every event to a shared vector.
//! Serves as the indexer contract in tests and in-process hosts.

use crate::events::GovernorEvent;
use crate::ports::outbound::EventPublisher;
use parking_lot::Mutex;

/// Append-only in-memory event sink.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<GovernorEvent>>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event published so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<GovernorEvent> {
        self.events.lock().clone()
    }

    /// Number of events published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: GovernorEvent) {
        self.events.lock().push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
