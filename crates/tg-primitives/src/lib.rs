//! # Shared Primitives
//!
//! Foundation crate for the treasury governance suite.
//!
//! ## Contents
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `value_objects` | `Address`, `Hash`, `Bytes`, `U256` |
//! | `entities` | `Transaction`, `Operation`, executor call parameters |
//! | `hashing` | Keccak-256 and the typed transaction-hash protocol |
//! | `ports` | Collaborator traits shared by multiple subsystems |
//! | `env` | Chain environment adapters (chain id + clock) |
//!
//! Everything here is pure and deterministic apart from `env::SystemChainEnv`,
//! which reads the wall clock.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod entities;
pub mod env;
pub mod hashing;
pub mod ports;
pub mod value_objects;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::entities::{ExecTransactionParams, Operation, Transaction};
    pub use crate::env::{ManualChainEnv, SystemChainEnv};
    pub use crate::hashing::{
        domain_separator, keccak256, transaction_hash, transaction_hash_data, tx_struct_hash,
    };
    pub use crate::ports::{ChainEnv, ExecutorError, SignatureError, TransactionExecutor};
    pub use crate::value_objects::{Address, Bytes, Hash, U256};
}
