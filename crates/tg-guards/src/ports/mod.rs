//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the guard layer.
//!
//! - **Driving (Inbound)**: `TransactionGuard` — the hook the host
//!   executor calls around every guarded transaction.
//! - **Driven (Outbound)**: `Freezable`, `GuardEventPublisher`.
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
