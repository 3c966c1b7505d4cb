//! # Guard Services
//!
//! Two `TransactionGuard` implementations:
//!
//! - [`TimelockFreezeGuard`]: signature-hash timelocks. Every guarded
//!   transaction must be announced ahead of time; the guard vetoes
//!   execution until the delay elapses, after the window closes, whenever
//!   a later freeze invalidates the record, and while the DAO is frozen.
//! - [`SimpleFreezeGuard`]: the freeze check alone, for treasuries that
//!   want the kill switch without the announcement delay.
//!
//! ## Concurrency
//!
//! Records and periods sit behind `tokio::sync::RwLock`. `timelock_transaction`
//! holds the record write lock across the existence check, signature
//! verification, and insert; every call in between is synchronous, so the
//! lock never spans an await.

use crate::domain::entities::{FreezeView, RecordState};
use crate::domain::services::{check_record, derive_record_state};
use crate::errors::GuardError;
use crate::events::GuardEvent;
use crate::ports::inbound::TransactionGuard;
use crate::ports::outbound::{Freezable, GuardEventPublisher};

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tg_primitives::entities::ExecTransactionParams;
use tg_primitives::hashing::keccak256;
use tg_primitives::ports::{ChainEnv, TransactionExecutor};
use tg_primitives::value_objects::{Address, Bytes, Hash};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

// =============================================================================
// OWNER STATE
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct OwnerState {
    owner: Address,
    pending: Option<Address>,
}

// =============================================================================
// PERIODS
// =============================================================================

/// Live guard periods. Unlike the governor's per-proposal snapshots, these
/// apply to existing records immediately: a record stores only its timelock
/// timestamp, and the window is recomputed at every check.
#[derive(Clone, Copy, Debug)]
struct GuardPeriods {
    timelock_period: u64,
    execution_period: u64,
}

// =============================================================================
// TIMELOCK FREEZE GUARD
// =============================================================================

/// Timelock guard keyed by signature hash.
///
/// Records map `keccak256(signatures)` to the timestamp the set was
/// announced. A signature set identifies exactly one transaction content
/// (signers sign the canonical transaction hash), so keying by signatures
/// binds each record to one transaction while letting re-signed copies of
/// the same transaction carry independent timelocks.
pub struct TimelockFreezeGuard<C: ChainEnv> {
    chain: C,
    owner: RwLock<OwnerState>,
    periods: RwLock<GuardPeriods>,
    /// Write-once: once a key is present it is never updated or removed.
    records: RwLock<HashMap<Hash, u64>>,
    freezable: Arc<dyn Freezable>,
    executor: Arc<dyn TransactionExecutor>,
    events: Arc<dyn GuardEventPublisher>,
}

impl<C: ChainEnv> TimelockFreezeGuard<C> {
    /// Creates a guard with the given periods.
    pub fn new(
        owner: Address,
        chain: C,
        freezable: Arc<dyn Freezable>,
        executor: Arc<dyn TransactionExecutor>,
        events: Arc<dyn GuardEventPublisher>,
        timelock_period: u64,
        execution_period: u64,
    ) -> Self {
        Self {
            chain,
            owner: RwLock::new(OwnerState {
                owner,
                pending: None,
            }),
            periods: RwLock::new(GuardPeriods {
                timelock_period,
                execution_period,
            }),
            records: RwLock::new(HashMap::new()),
            freezable,
            executor,
            events,
        }
    }

    fn freeze_view(&self) -> FreezeView {
        FreezeView {
            frozen: self.freezable.is_frozen(),
            last_freeze_time: self.freezable.last_freeze_time(),
        }
    }

    // =========================================================================
    // TIMELOCKING
    // =========================================================================

    /// Announces a transaction: verifies the signature set against the
    /// executor's canonical hash and records the current timestamp under
    /// `keccak256(signatures)`. Returns the transaction hash.
    ///
    /// Anyone may call; the signature check is the authorization. The
    /// record is write-once, even after it expires or is invalidated by a
    /// freeze, so replaying the same signature set is permanently blocked.
    ///
    /// # Errors
    ///
    /// `DaoFrozen` while frozen, `AlreadyTimelocked` for a known signature
    /// set, or the executor's `SignatureError` passed through.
    #[instrument(skip(self, params, signatures), fields(caller = %caller))]
    pub async fn timelock_transaction(
        &self,
        caller: Address,
        params: &ExecTransactionParams,
        signatures: &Bytes,
        nonce: u64,
    ) -> Result<Hash, GuardError> {
        if self.freezable.is_frozen() {
            return Err(GuardError::DaoFrozen);
        }

        let key = keccak256(signatures.as_slice());
        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            return Err(GuardError::AlreadyTimelocked);
        }

        let data = self.executor.encode_transaction_data(params, nonce);
        let tx_hash = keccak256(data.as_slice());
        self.executor.check_signatures(tx_hash, &data, signatures)?;

        let now = self.chain.timestamp();
        records.insert(key, now);
        drop(records);

        self.events.publish(GuardEvent::TransactionTimelocked {
            caller,
            tx_hash,
            signatures: signatures.clone(),
        });
        info!(tx_hash = %tx_hash, at = now, "transaction timelocked");
        Ok(tx_hash)
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Current owner.
    pub async fn owner(&self) -> Address {
        self.owner.read().await.owner
    }

    /// Current timelock period (seconds). Applies to all records.
    pub async fn timelock_period(&self) -> u64 {
        self.periods.read().await.timelock_period
    }

    /// Current execution period (seconds). Applies to all records.
    pub async fn execution_period(&self) -> u64 {
        self.periods.read().await.execution_period
    }

    /// Timestamp a signature set was timelocked at, 0 if never.
    pub async fn timelocked_at(&self, signatures: &Bytes) -> u64 {
        let key = keccak256(signatures.as_slice());
        self.records.read().await.get(&key).copied().unwrap_or(0)
    }

    /// State-machine position of a signature set's record, under current
    /// periods and the current freeze state.
    pub async fn record_state(&self, signatures: &Bytes) -> RecordState {
        let ts = self.timelocked_at(signatures).await;
        let periods = *self.periods.read().await;
        derive_record_state(
            ts,
            self.chain.timestamp(),
            periods.timelock_period,
            periods.execution_period,
            self.freezable.last_freeze_time(),
        )
    }

    // =========================================================================
    // ADMIN (owner-gated)
    // =========================================================================

    async fn require_owner(&self, caller: Address) -> Result<(), GuardError> {
        if self.owner.read().await.owner == caller {
            Ok(())
        } else {
            Err(GuardError::Unauthorized { caller })
        }
    }

    /// Updates the timelock period. Takes effect on existing records
    /// immediately; a pending record may become ready or ready again.
    pub async fn update_timelock_period(
        &self,
        caller: Address,
        value: u64,
    ) -> Result<(), GuardError> {
        self.require_owner(caller).await?;
        self.periods.write().await.timelock_period = value;
        self.events
            .publish(GuardEvent::TimelockPeriodUpdated { value });
        info!(value, "guard timelock period updated");
        Ok(())
    }

    /// Updates the execution period. Takes effect on existing records
    /// immediately; an expired record may re-enter its window.
    pub async fn update_execution_period(
        &self,
        caller: Address,
        value: u64,
    ) -> Result<(), GuardError> {
        self.require_owner(caller).await?;
        self.periods.write().await.execution_period = value;
        self.events
            .publish(GuardEvent::ExecutionPeriodUpdated { value });
        info!(value, "guard execution period updated");
        Ok(())
    }

    /// Starts the two-step ownership handshake.
    pub async fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), GuardError> {
        self.require_owner(caller).await?;
        self.owner.write().await.pending = Some(new_owner);
        debug!(new_owner = %new_owner, "ownership transfer started");
        Ok(())
    }

    /// Completes the handshake; only the pending owner may call.
    pub async fn accept_ownership(&self, caller: Address) -> Result<(), GuardError> {
        let mut owner = self.owner.write().await;
        if owner.pending != Some(caller) {
            return Err(GuardError::NotPendingOwner { caller });
        }
        owner.owner = caller;
        owner.pending = None;
        drop(owner);
        self.events
            .publish(GuardEvent::OwnershipTransferred { new_owner: caller });
        info!(new_owner = %caller, "guard ownership transferred");
        Ok(())
    }
}

#[async_trait]
impl<C: ChainEnv> TransactionGuard for TimelockFreezeGuard<C> {
    /// The pre-execution gate. Looks the record up by `keccak256(signatures)`
    /// and runs the full check ladder; the other parameters are already
    /// bound into the record through the signature check at timelock time,
    /// so they are not consulted here.
    async fn check_transaction(
        &self,
        _params: &ExecTransactionParams,
        signatures: &Bytes,
    ) -> Result<(), GuardError> {
        let key = keccak256(signatures.as_slice());
        let ts = self.records.read().await.get(&key).copied().unwrap_or(0);
        let periods = *self.periods.read().await;
        check_record(
            ts,
            self.chain.timestamp(),
            periods.timelock_period,
            periods.execution_period,
            self.freeze_view(),
        )
    }

    /// Nothing to settle after execution; the record stays in place and
    /// the write-once rule prevents replay on its own.
    async fn check_after_execution(&self, tx_hash: Hash, success: bool) {
        debug!(tx_hash = %tx_hash, success, "guarded execution finished");
    }
}

// =============================================================================
// SIMPLE FREEZE GUARD
// =============================================================================

/// The freeze kill switch alone: vetoes every transaction while the DAO is
/// frozen, passes everything otherwise. Stateless and unowned.
pub struct SimpleFreezeGuard {
    freezable: Arc<dyn Freezable>,
}

impl SimpleFreezeGuard {
    /// Creates a guard watching the given freeze authority.
    #[must_use]
    pub fn new(freezable: Arc<dyn Freezable>) -> Self {
        Self { freezable }
    }
}

#[async_trait]
impl TransactionGuard for SimpleFreezeGuard {
    async fn check_transaction(
        &self,
        _params: &ExecTransactionParams,
        _signatures: &Bytes,
    ) -> Result<(), GuardError> {
        if self.freezable.is_frozen() {
            return Err(GuardError::DaoFrozen);
        }
        Ok(())
    }

    async fn check_after_execution(&self, _tx_hash: Hash, _success: bool) {}
}

// =============================================================================
// TESTS
// =============================================================================
