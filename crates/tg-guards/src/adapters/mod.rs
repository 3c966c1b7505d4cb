//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of guard ports for in-process hosts and tests.

pub mod event_log;
pub mod freeze_switch;

pub use event_log::*;
pub use freeze_switch::*;
