//! # Shared Test Harness
//!
//! Mock collaborators and pre-wired fixtures used across the integration
//! flows. The clock is a `ManualChainEnv` driven by hand; the executor
//! records every call and can be told to revert at a given call index.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use tg_governor::adapters::InMemoryEventLog;
use tg_governor::errors::StrategyError;
use tg_governor::ports::inbound::ProposalGovernorApi;
use tg_governor::ports::outbound::{EventPublisher, VotingStrategy};
use tg_governor::service::ProposalGovernorService;
use tg_guards::adapters::{InMemoryGuardEventLog, ManualFreeze};
use tg_guards::ports::outbound::{Freezable, GuardEventPublisher};
use tg_guards::service::TimelockFreezeGuard;
use tg_primitives::entities::{ExecTransactionParams, Operation, Transaction};
use tg_primitives::env::ManualChainEnv;
use tg_primitives::ports::{ExecutorError, SignatureError, TransactionExecutor};
use tg_primitives::value_objects::{Address, Bytes, Hash, U256};

// =============================================================================
// SHARED CONSTANTS
// =============================================================================

pub const CHAIN_ID: u64 = 7;
pub const VOTING_END: u64 = 1_000;
pub const TIMELOCK: u64 = 100;
pub const EXECUTION: u64 = 50;
/// Starting clock for guard flows, comfortably past zero so "never
/// timelocked" (timestamp 0) stays unambiguous.
pub const GUARD_START: u64 = 10_000;

pub const OWNER: Address = Address::new([0xaa; 20]);
pub const PROPOSER: Address = Address::new([0xbb; 20]);
pub const RELAYER: Address = Address::new([0xcc; 20]);
pub const GOVERNOR_ADDR: Address = Address::new([0x60; 20]);
pub const FREEZE_ADDR: Address = Address::new([0x61; 20]);

// =============================================================================
// MOCK STRATEGY
// =============================================================================

/// Voting strategy with hand-set toggles.
pub struct MockStrategy {
    address: Address,
    pub voting_end: AtomicU64,
    pub passed: AtomicBool,
    pub allow_proposer: AtomicBool,
    pub initialized: Mutex<Vec<u64>>,
}

impl MockStrategy {
    pub fn new(address_byte: u8) -> Arc<Self> {
        Arc::new(Self {
            address: Address::new([address_byte; 20]),
            voting_end: AtomicU64::new(VOTING_END),
            passed: AtomicBool::new(true),
            allow_proposer: AtomicBool::new(true),
            initialized: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl VotingStrategy for MockStrategy {
    fn address(&self) -> Address {
        self.address
    }

    async fn is_proposer(
        &self,
        _proposer: Address,
        _adapter: Address,
        _adapter_data: &Bytes,
    ) -> Result<bool, StrategyError> {
        Ok(self.allow_proposer.load(Ordering::SeqCst))
    }

    async fn initialize_proposal(&self, proposal_id: u64) -> Result<(), StrategyError> {
        self.initialized.lock().push(proposal_id);
        Ok(())
    }

    async fn voting_timestamps(&self, _proposal_id: u64) -> Result<(u64, u64), StrategyError> {
        Ok((0, self.voting_end.load(Ordering::SeqCst)))
    }

    async fn is_passed(&self, _proposal_id: u64) -> Result<bool, StrategyError> {
        Ok(self.passed.load(Ordering::SeqCst))
    }
}

// =============================================================================
// RECORDING EXECUTOR
// =============================================================================

/// Executor double shared by governor and guard flows.
///
/// `exec` logs every call and succeeds unless `fail_at` names the 0-based
/// call index that should revert. Encoding concatenates the fields that
/// distinguish transactions, so distinct content hashes apart; signature
/// verification accepts anything non-empty.
pub struct RecordingExecutor {
    pub calls: Mutex<Vec<(Address, Operation)>>,
    pub fail_at: AtomicU64,
    pub reject_signatures: AtomicBool,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_at: AtomicU64::new(u64::MAX),
            reject_signatures: AtomicBool::new(false),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl TransactionExecutor for RecordingExecutor {
    async fn exec(
        &self,
        to: Address,
        _value: U256,
        _data: &Bytes,
        operation: Operation,
    ) -> Result<bool, ExecutorError> {
        let index = {
            let mut calls = self.calls.lock();
            calls.push((to, operation));
            calls.len() as u64 - 1
        };
        Ok(index != self.fail_at.load(Ordering::SeqCst))
    }

    fn encode_transaction_data(&self, params: &ExecTransactionParams, nonce: u64) -> Bytes {
        let mut data = Vec::new();
        data.extend_from_slice(params.to.as_bytes());
        data.extend_from_slice(params.data.as_slice());
        data.push(params.operation.as_u8());
        data.extend_from_slice(&nonce.to_be_bytes());
        Bytes::from_vec(data)
    }

    fn check_signatures(
        &self,
        _hash: Hash,
        _data: &Bytes,
        signatures: &Bytes,
    ) -> Result<(), SignatureError> {
        if self.reject_signatures.load(Ordering::SeqCst) {
            return Err(SignatureError::Invalid("forced rejection".to_string()));
        }
        if signatures.is_empty() {
            return Err(SignatureError::ThresholdNotMet {
                got: 0,
                required: 1,
            });
        }
        Ok(())
    }
}

// =============================================================================
// GOVERNANCE HARNESS
// =============================================================================

/// A governor wired to the mock strategy, the recording executor, and a
/// shared hand-driven clock.
pub struct GovernanceHarness {
    pub governor: Arc<ProposalGovernorService<Arc<ManualChainEnv>>>,
    pub env: Arc<ManualChainEnv>,
    pub strategy: Arc<MockStrategy>,
    pub executor: Arc<RecordingExecutor>,
    pub log: Arc<InMemoryEventLog>,
}

impl GovernanceHarness {
    pub fn new() -> Self {
        let env = Arc::new(ManualChainEnv::new(CHAIN_ID, 0));
        let strategy = MockStrategy::new(0x51);
        let executor = RecordingExecutor::new();
        let log = Arc::new(InMemoryEventLog::new());
        let governor = Arc::new(
            ProposalGovernorService::new(
                GOVERNOR_ADDR,
                OWNER,
                Arc::clone(&env),
                strategy.clone() as Arc<dyn VotingStrategy>,
                executor.clone() as Arc<dyn TransactionExecutor>,
                log.clone() as Arc<dyn EventPublisher>,
                TIMELOCK,
                EXECUTION,
            )
            .unwrap(),
        );
        Self {
            governor,
            env,
            strategy,
            executor,
            log,
        }
    }

    pub async fn submit(&self, txs: Vec<Transaction>) -> u64 {
        self.governor
            .submit_proposal(
                PROPOSER,
                txs,
                "integration proposal".to_string(),
                Address::ZERO,
                Bytes::new(),
            )
            .await
            .unwrap()
    }

    /// Moves the shared clock into the proposal execution window.
    pub fn enter_execution_window(&self) {
        self.env.set_timestamp(VOTING_END + TIMELOCK + 1);
    }
}

/// Builds `n` transactions with distinct targets and calldata.
pub fn sample_txs(n: usize) -> Vec<Transaction> {
    (0..n)
        .map(|i| {
            Transaction::new(
                Address::new([i as u8 + 1; 20]),
                U256::from(i as u64),
                Bytes::from_slice(&[i as u8]),
                Operation::Call,
            )
        })
        .collect()
}

// =============================================================================
// GUARD HARNESS
// =============================================================================

/// A timelock guard wired to a manual freeze switch, the recording
/// executor, and a shared hand-driven clock.
pub struct GuardHarness {
    pub guard: Arc<TimelockFreezeGuard<Arc<ManualChainEnv>>>,
    pub env: Arc<ManualChainEnv>,
    pub freeze: Arc<ManualFreeze>,
    pub executor: Arc<RecordingExecutor>,
    pub events: Arc<InMemoryGuardEventLog>,
}

impl GuardHarness {
    pub fn new(start: u64) -> Self {
        let env = Arc::new(ManualChainEnv::new(CHAIN_ID, start));
        let freeze = Arc::new(ManualFreeze::new(FREEZE_ADDR));
        let executor = RecordingExecutor::new();
        let events = Arc::new(InMemoryGuardEventLog::new());
        let guard = Arc::new(TimelockFreezeGuard::new(
            OWNER,
            Arc::clone(&env),
            freeze.clone() as Arc<dyn Freezable>,
            executor.clone() as Arc<dyn TransactionExecutor>,
            events.clone() as Arc<dyn GuardEventPublisher>,
            TIMELOCK,
            EXECUTION,
        ));
        Self {
            guard,
            env,
            freeze,
            executor,
            events,
        }
    }
}

/// Builds execution parameters with a distinguishing calldata tag.
pub fn exec_params(tag: u8) -> ExecTransactionParams {
    ExecTransactionParams {
        to: Address::new([0x11; 20]),
        value: U256::from(1_000),
        data: Bytes::from_slice(&[tag]),
        operation: Operation::Call,
        safe_tx_gas: U256::zero(),
        base_gas: U256::zero(),
        gas_price: U256::zero(),
        gas_token: Address::ZERO,
        refund_receiver: Address::ZERO,
    }
}

/// Builds a 65-byte signature blob with a distinguishing tag.
pub fn signature_set(tag: u8) -> Bytes {
    Bytes::from_slice(&[tag; 65])
}
