//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the proposal governor.
//!
//! - **Driving (Inbound)**: `ProposalGovernorApi`
//! - **Driven (Outbound)**: `VotingStrategy`, `EventPublisher`
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
