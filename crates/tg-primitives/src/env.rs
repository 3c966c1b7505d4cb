//! # Chain Environment Adapters
//!
//! Two [`ChainEnv`](crate::ports::ChainEnv) implementations: a wall-clock
//! adapter for hosts that track real time, and a hand-driven adapter for
//! tests that need to sit exactly on window boundaries.

use crate::ports::ChainEnv;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// SYSTEM CLOCK
// =============================================================================

/// Chain environment backed by the system clock.
#[derive(Debug)]
pub struct SystemChainEnv {
    chain_id: u64,
}

impl SystemChainEnv {
    /// Creates an environment for the given chain id.
    #[must_use]
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }
}

impl ChainEnv for SystemChainEnv {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// Chain environment with a hand-driven clock.
///
/// Time only moves when a test calls [`set_timestamp`](Self::set_timestamp)
/// or [`advance`](Self::advance), so boundary conditions can be probed to
/// the second.
#[derive(Debug)]
pub struct ManualChainEnv {
    chain_id: u64,
    now: AtomicU64,
}

impl ManualChainEnv {
    /// Creates an environment at the given chain id and start time.
    #[must_use]
    pub const fn new(chain_id: u64, start: u64) -> Self {
        Self {
            chain_id,
            now: AtomicU64::new(start),
        }
    }

    /// Sets the clock to an absolute timestamp.
    pub fn set_timestamp(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advances the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl ChainEnv for ManualChainEnv {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn timestamp(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// =============================================================================
// TESTS
// =============================================================================
