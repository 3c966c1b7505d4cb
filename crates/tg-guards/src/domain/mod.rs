//! # Domain Layer (Inner Hexagon)
//!
//! Pure timelock-record logic. Every function here is a deterministic
//! function of timestamps and periods; the freeze flag arrives as a value,
//! never as a live handle.

pub mod entities;
pub mod services;

pub use entities::*;
pub use services::*;
