//! # Transaction-Hash Protocol
//!
//! Deterministic, tamper-evident hashing of governance transactions:
//!
//! ```text
//! domain_separator = keccak256(DOMAIN_TYPEHASH || chain_id || verifying_contract)
//! struct_hash      = keccak256(TX_TYPEHASH || to || value || keccak256(data) || operation || nonce)
//! payload          = 0x19 || 0x01 || domain_separator || struct_hash
//! final_hash       = keccak256(payload)
//! ```
//!
//! All struct fields are ABI-style 32-byte big-endian words (addresses
//! left-padded). Typehashes are hashed once from their type strings and
//! cached for the life of the process; `chain_id` is supplied fresh by the
//! caller on every invocation.

use crate::entities::{Operation, Transaction};
use crate::value_objects::{Address, Hash, U256};
use sha3::{Digest, Keccak256};
use std::sync::OnceLock;

/// Type string behind [`domain_typehash`].
const DOMAIN_TYPE: &str = "EIP712Domain(uint256 chainId,address verifyingContract)";

/// Type string behind [`tx_typehash`].
const TX_TYPE: &str =
    "Transaction(address to,uint256 value,bytes data,uint8 operation,uint256 nonce)";

/// EIP-191 version byte pair prefixing the signing payload.
const PAYLOAD_PREFIX: [u8; 2] = [0x19, 0x01];

// =============================================================================
// KECCAK256 UTILITY
// =============================================================================

/// Computes the Keccak-256 hash of data.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let hash = Keccak256::digest(data);
    Hash::new(hash.into())
}

// =============================================================================
// TYPEHASHES
// =============================================================================

/// Typehash of the domain struct. Hashed once, cached.
#[must_use]
pub fn domain_typehash() -> Hash {
    static CACHE: OnceLock<Hash> = OnceLock::new();
    *CACHE.get_or_init(|| keccak256(DOMAIN_TYPE.as_bytes()))
}

/// Typehash of the transaction struct. Hashed once, cached.
#[must_use]
pub fn tx_typehash() -> Hash {
    static CACHE: OnceLock<Hash> = OnceLock::new();
    *CACHE.get_or_init(|| keccak256(TX_TYPE.as_bytes()))
}

// =============================================================================
// WORD ENCODING
// =============================================================================

/// Left-pads an address into a 32-byte word.
fn address_word(addr: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(addr.as_bytes());
    word
}

/// Encodes a U256 as a 32-byte big-endian word.
fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Encodes a u64 as a 32-byte big-endian word.
fn u64_word(value: u64) -> [u8; 32] {
    u256_word(U256::from(value))
}

/// Encodes an operation tag as a 32-byte word (uint8, right-aligned).
fn operation_word(operation: Operation) -> [u8; 32] {
    u256_word(U256::from(operation.as_u8()))
}

// =============================================================================
// PROTOCOL
// =============================================================================

/// Computes the domain separator binding hashes to one chain and one
/// verifying contract.
#[must_use]
pub fn domain_separator(chain_id: u64, verifying_contract: Address) -> Hash {
    let mut data = Vec::with_capacity(96);
    data.extend_from_slice(domain_typehash().as_bytes());
    data.extend_from_slice(&u64_word(chain_id));
    data.extend_from_slice(&address_word(verifying_contract));
    keccak256(&data)
}

/// Computes the struct hash of one transaction.
///
/// Calldata enters as `keccak256(data)`, so arbitrarily long payloads hash
/// in constant space and any single-byte change flips the result.
#[must_use]
pub fn tx_struct_hash(tx: &Transaction, nonce: u64) -> Hash {
    let mut data = Vec::with_capacity(192);
    data.extend_from_slice(tx_typehash().as_bytes());
    data.extend_from_slice(&address_word(tx.to));
    data.extend_from_slice(&u256_word(tx.value));
    data.extend_from_slice(keccak256(tx.data.as_slice()).as_bytes());
    data.extend_from_slice(&operation_word(tx.operation));
    data.extend_from_slice(&u64_word(nonce));
    keccak256(&data)
}

/// Builds the full signing payload (`0x19 0x01 || separator || struct hash`).
#[must_use]
pub fn transaction_hash_data(
    chain_id: u64,
    verifying_contract: Address,
    tx: &Transaction,
    nonce: u64,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(66);
    data.extend_from_slice(&PAYLOAD_PREFIX);
    data.extend_from_slice(domain_separator(chain_id, verifying_contract).as_bytes());
    data.extend_from_slice(tx_struct_hash(tx, nonce).as_bytes());
    data
}

/// Computes the final transaction hash: `keccak256(transaction_hash_data)`.
#[must_use]
pub fn transaction_hash(
    chain_id: u64,
    verifying_contract: Address,
    tx: &Transaction,
    nonce: u64,
) -> Hash {
    keccak256(&transaction_hash_data(chain_id, verifying_contract, tx, nonce))
}

// =============================================================================
// TESTS
// =============================================================================
