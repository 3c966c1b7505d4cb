//! # Treasury Governance Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/        # Cross-crate choreography
//!     ├── harness.rs      # Shared mock collaborators and builders
//!     ├── flows.rs        # Governor and guard lifecycle flows
//!     └── e2e_choreography.rs  # Governor + guard wired around one executor
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tg-tests
//!
//! # By category
//! cargo test -p tg-tests integration::flows
//! cargo test -p tg-tests integration::e2e_choreography
//! ```

#![allow(dead_code)]

pub mod integration;
