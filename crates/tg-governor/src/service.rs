//! # Proposal Governor Service
//!
//! Owns proposal records, derives lifecycle state on demand, and drives
//! strictly ordered partial execution through the transaction executor.
//!
//! ## Concurrency
//!
//! Shared state sits behind `tokio::sync::RwLock`; mutating paths re-read
//! current state at call start, so interleaved separate calls observe a
//! consistent record. The execution counter is incremented *before* the
//! executor call and the write lock is released across the await, so a
//! reentrant callback sees the slot already consumed and cannot replay it.
//!
//! ## Atomicity
//!
//! One `execute_proposal` call is all-or-nothing: on any failure the
//! counter is restored to its value at call entry and no event is
//! published. Partial execution is the intended behavior *across* calls.

use crate::domain::entities::{GovernorConfig, Proposal, ProposalState, ProposalView};
use crate::domain::invariants::check_batch_extent;
use crate::domain::services::derive_proposal_state;
use crate::errors::GovernorError;
use crate::events::GovernorEvent;
use crate::ports::inbound::ProposalGovernorApi;
use crate::ports::outbound::{EventPublisher, VotingStrategy};

use async_trait::async_trait;
use std::sync::Arc;
use tg_primitives::entities::Transaction;
use tg_primitives::hashing::{transaction_hash, transaction_hash_data};
use tg_primitives::ports::{ChainEnv, TransactionExecutor};
use tg_primitives::value_objects::{Address, Bytes, Hash};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

/// Nonce used for every proposal-embedded transaction. Free parameter on
/// the public hashing accessors.
const PROPOSAL_TX_NONCE: u64 = 0;

// =============================================================================
// OWNER STATE
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct OwnerState {
    owner: Address,
    pending: Option<Address>,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The proposal governor.
///
/// Generic over the chain environment so tests can drive the clock by
/// hand; collaborators are trait objects resolved by the host.
pub struct ProposalGovernorService<C: ChainEnv> {
    /// Governor's own address, bound into every transaction hash.
    address: Address,
    chain: C,
    owner: RwLock<OwnerState>,
    config: RwLock<GovernorConfig>,
    proposals: RwLock<Vec<Proposal>>,
    executor: Arc<dyn TransactionExecutor>,
    events: Arc<dyn EventPublisher>,
}

impl<C: ChainEnv> ProposalGovernorService<C> {
    /// Creates a governor with the given defaults.
    ///
    /// # Errors
    ///
    /// `InvalidStrategy` if the initial strategy reports the zero address.
    pub fn new(
        address: Address,
        owner: Address,
        chain: C,
        strategy: Arc<dyn VotingStrategy>,
        executor: Arc<dyn TransactionExecutor>,
        events: Arc<dyn EventPublisher>,
        timelock_period: u64,
        execution_period: u64,
    ) -> Result<Self, GovernorError> {
        if strategy.address().is_zero() {
            return Err(GovernorError::InvalidStrategy);
        }
        Ok(Self {
            address,
            chain,
            owner: RwLock::new(OwnerState {
                owner,
                pending: None,
            }),
            config: RwLock::new(GovernorConfig {
                strategy,
                timelock_period,
                execution_period,
            }),
            proposals: RwLock::new(Vec::new()),
            executor,
            events,
        })
    }

    // =========================================================================
    // HASHING ACCESSORS
    // =========================================================================

    /// Final hash of a transaction under this governor's domain.
    /// `nonce` is fixed at 0 for proposal-embedded transactions but free
    /// here. Chain id is read fresh on every call.
    #[must_use]
    pub fn tx_hash(&self, tx: &Transaction, nonce: u64) -> Hash {
        transaction_hash(self.chain.chain_id(), self.address, tx, nonce)
    }

    /// Full signing payload (`0x19 0x01 || separator || struct hash`) of a
    /// transaction under this governor's domain.
    #[must_use]
    pub fn tx_hash_data(&self, tx: &Transaction, nonce: u64) -> Bytes {
        Bytes::from_vec(transaction_hash_data(
            self.chain.chain_id(),
            self.address,
            tx,
            nonce,
        ))
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Governor's own address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Current owner.
    pub async fn owner(&self) -> Address {
        self.owner.read().await.owner
    }

    /// Current default timelock period (seconds).
    pub async fn timelock_period(&self) -> u64 {
        self.config.read().await.timelock_period
    }

    /// Current default execution period (seconds).
    pub async fn execution_period(&self) -> u64 {
        self.config.read().await.execution_period
    }

    /// Address of the current default strategy.
    pub async fn strategy_address(&self) -> Address {
        self.config.read().await.strategy.address()
    }

    /// Clones the stored proposal, or fails `InvalidProposal`.
    async fn proposal_record(&self, proposal_id: u64) -> Result<Proposal, GovernorError> {
        let proposals = self.proposals.read().await;
        proposals
            .get(proposal_id as usize)
            .cloned()
            .ok_or(GovernorError::InvalidProposal {
                id: proposal_id,
                total: proposals.len() as u64,
            })
    }

    // =========================================================================
    // ADMIN (owner-gated)
    // =========================================================================

    async fn require_owner(&self, caller: Address) -> Result<(), GovernorError> {
        if self.owner.read().await.owner == caller {
            Ok(())
        } else {
            Err(GovernorError::Unauthorized { caller })
        }
    }

    /// Updates the default timelock period. Existing proposals keep their
    /// snapshot.
    pub async fn update_timelock_period(
        &self,
        caller: Address,
        value: u64,
    ) -> Result<(), GovernorError> {
        self.require_owner(caller).await?;
        self.config.write().await.timelock_period = value;
        self.events
            .publish(GovernorEvent::TimelockPeriodUpdated { value });
        info!(value, "governor timelock period updated");
        Ok(())
    }

    /// Updates the default execution period. Existing proposals keep their
    /// snapshot.
    pub async fn update_execution_period(
        &self,
        caller: Address,
        value: u64,
    ) -> Result<(), GovernorError> {
        self.require_owner(caller).await?;
        self.config.write().await.execution_period = value;
        self.events
            .publish(GovernorEvent::ExecutionPeriodUpdated { value });
        info!(value, "governor execution period updated");
        Ok(())
    }

    /// Installs a new default strategy. Existing proposals keep the
    /// strategy they were submitted under.
    pub async fn update_strategy(
        &self,
        caller: Address,
        strategy: Arc<dyn VotingStrategy>,
    ) -> Result<(), GovernorError> {
        self.require_owner(caller).await?;
        let value = strategy.address();
        if value.is_zero() {
            return Err(GovernorError::InvalidStrategy);
        }
        self.config.write().await.strategy = strategy;
        self.events.publish(GovernorEvent::StrategyUpdated { value });
        info!(strategy = %value, "governor strategy updated");
        Ok(())
    }

    /// Starts the two-step ownership handshake.
    pub async fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), GovernorError> {
        self.require_owner(caller).await?;
        self.owner.write().await.pending = Some(new_owner);
        debug!(new_owner = %new_owner, "ownership transfer started");
        Ok(())
    }

    /// Completes the handshake; only the pending owner may call.
    pub async fn accept_ownership(&self, caller: Address) -> Result<(), GovernorError> {
        let mut owner = self.owner.write().await;
        if owner.pending != Some(caller) {
            return Err(GovernorError::NotPendingOwner { caller });
        }
        owner.owner = caller;
        owner.pending = None;
        drop(owner);
        self.events
            .publish(GovernorEvent::OwnershipTransferred { new_owner: caller });
        info!(new_owner = %caller, "governor ownership transferred");
        Ok(())
    }

    // =========================================================================
    // EXECUTION INTERNALS
    // =========================================================================

    /// Runs the batch against the proposal, transaction by transaction.
    /// Increments made here are rolled back by the caller on error.
    async fn run_batch(
        &self,
        proposal_id: u64,
        transactions: &[Transaction],
        executed: &mut Vec<Hash>,
    ) -> Result<(), GovernorError> {
        for tx in transactions {
            // Window may close mid-batch, so state is re-derived per slot.
            let state = self.proposal_state(proposal_id).await?;
            if state != ProposalState::Executable {
                return Err(GovernorError::ProposalNotExecutable {
                    id: proposal_id,
                    state,
                });
            }

            let actual = self.tx_hash(tx, PROPOSAL_TX_NONCE);
            let index;
            {
                let mut proposals = self.proposals.write().await;
                let proposal = &mut proposals[proposal_id as usize];
                index = proposal.execution_counter;
                let Some(&expected) = proposal.tx_hashes.get(index) else {
                    // Counter at the end means every slot is consumed.
                    return Err(GovernorError::ProposalNotExecutable {
                        id: proposal_id,
                        state: ProposalState::Executed,
                    });
                };
                if actual != expected {
                    return Err(GovernorError::InvalidTxHash {
                        index,
                        expected,
                        actual,
                    });
                }
                // Consume the slot before the external call so a reentrant
                // callback cannot replay it.
                proposal.execution_counter = index + 1;
            }

            let success = self
                .executor
                .exec(tx.to, tx.value, &tx.data, tx.operation)
                .await?;
            if !success {
                return Err(GovernorError::TxFailed { index });
            }
            executed.push(actual);
        }
        Ok(())
    }
}

// =============================================================================
// INBOUND API
// =============================================================================

#[async_trait]
impl<C: ChainEnv> ProposalGovernorApi for ProposalGovernorService<C> {
    #[instrument(skip(self, transactions, metadata, adapter_data), fields(proposer = %caller))]
    async fn submit_proposal(
        &self,
        caller: Address,
        transactions: Vec<Transaction>,
        metadata: String,
        adapter: Address,
        adapter_data: Bytes,
    ) -> Result<u64, GovernorError> {
        // Snapshot the defaults once; they are never re-read for this
        // proposal.
        let (strategy, timelock_period, execution_period) = {
            let config = self.config.read().await;
            (
                Arc::clone(&config.strategy),
                config.timelock_period,
                config.execution_period,
            )
        };

        if !strategy.is_proposer(caller, adapter, &adapter_data).await? {
            warn!(proposer = %caller, "proposer rejected by strategy");
            return Err(GovernorError::InvalidProposer { proposer: caller });
        }

        let tx_hashes: Vec<Hash> = transactions
            .iter()
            .map(|tx| self.tx_hash(tx, PROPOSAL_TX_NONCE))
            .collect();

        // Lock held across initialize_proposal: the stored record must be
        // visible to the strategy, and a failure must unwind the store.
        let mut proposals = self.proposals.write().await;
        let proposal_id = proposals.len() as u64;
        proposals.push(Proposal {
            strategy: Arc::clone(&strategy),
            tx_hashes,
            timelock_period,
            execution_period,
            execution_counter: 0,
            execution_lock: Arc::new(Mutex::new(())),
        });

        if let Err(err) = strategy.initialize_proposal(proposal_id).await {
            proposals.pop();
            warn!(proposal_id, error = %err, "strategy rejected proposal initialization");
            return Err(err.into());
        }
        drop(proposals);

        self.events.publish(GovernorEvent::ProposalCreated {
            strategy: strategy.address(),
            proposal_id,
            proposer: caller,
            transactions,
            metadata,
        });
        info!(proposal_id, "proposal submitted");
        Ok(proposal_id)
    }

    async fn proposal_state(&self, proposal_id: u64) -> Result<ProposalState, GovernorError> {
        let proposal = self.proposal_record(proposal_id).await?;
        let (_, voting_end) = proposal.strategy.voting_timestamps(proposal_id).await?;
        let now = self.chain.timestamp();
        if now <= voting_end {
            return Ok(ProposalState::Active);
        }
        let passed = proposal.strategy.is_passed(proposal_id).await?;
        Ok(derive_proposal_state(
            now,
            voting_end,
            passed,
            proposal.execution_counter,
            proposal.tx_hashes.len(),
            proposal.timelock_period,
            proposal.execution_period,
        ))
    }

    #[instrument(skip(self, transactions), fields(batch_len = transactions.len()))]
    async fn execute_proposal(
        &self,
        proposal_id: u64,
        transactions: Vec<Transaction>,
    ) -> Result<(), GovernorError> {
        let record = self.proposal_record(proposal_id).await?;
        let Ok(_execution) = Arc::clone(&record.execution_lock).try_lock_owned() else {
            return Err(GovernorError::ExecutionInProgress { id: proposal_id });
        };

        // Re-read under the lock: the record may have advanced between the
        // lookup above and the lock acquisition. From here until the guard
        // drops, this call is the only one moving the counter.
        let snapshot = self.proposal_record(proposal_id).await?;
        let counter_at_entry = snapshot.execution_counter;

        if !check_batch_extent(counter_at_entry, transactions.len(), snapshot.tx_hashes.len()) {
            return Err(GovernorError::InvalidTxs {
                batch_len: transactions.len(),
                remaining: snapshot.remaining(),
            });
        }

        let mut executed = Vec::with_capacity(transactions.len());
        if let Err(err) = self
            .run_batch(proposal_id, &transactions, &mut executed)
            .await
        {
            // Revert every increment made by this call.
            let mut proposals = self.proposals.write().await;
            proposals[proposal_id as usize].execution_counter = counter_at_entry;
            drop(proposals);
            warn!(proposal_id, error = %err, "execution batch rolled back");
            return Err(err);
        }

        self.events.publish(GovernorEvent::ProposalExecuted {
            proposal_id,
            tx_hashes: executed,
        });
        info!(
            proposal_id,
            executed = transactions.len(),
            "proposal batch executed"
        );
        Ok(())
    }

    async fn proposal(&self, proposal_id: u64) -> Result<ProposalView, GovernorError> {
        Ok(ProposalView::from(&self.proposal_record(proposal_id).await?))
    }

    async fn proposal_tx_hashes(&self, proposal_id: u64) -> Result<Vec<Hash>, GovernorError> {
        Ok(self.proposal_record(proposal_id).await?.tx_hashes)
    }

    async fn total_proposal_count(&self) -> u64 {
        self.proposals.read().await.len() as u64
    }
}

// =============================================================================
// TESTS
// =============================================================================
