//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of governor ports for in-process hosts and
//! tests. On-chain deployments replace these with host bindings.

pub mod event_log;

pub use event_log::*;
