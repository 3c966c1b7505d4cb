//! # Domain Layer (Inner Hexagon)
//!
//! Pure proposal-lifecycle logic. NO I/O, NO async, NO external calls.
//! The async collaborators (strategy, executor) are consulted by the
//! service layer; everything in here is a deterministic function of its
//! arguments.

pub mod entities;
pub mod invariants;
pub mod services;

pub use entities::*;
pub use invariants::*;
pub use services::*;
