//! # Integration Tests
//!
//! Cross-crate flows exercising the governor and the guards through the
//! same mock executor and hand-driven clock.

pub mod harness;

pub mod e2e_choreography;
