//! # End-to-End Choreography
//!
//! The guard hooks exercised the way a guarded treasury executor drives
//! them: pre-check, execute, post-notify. Also covers governance of the
//! guard itself, with a governor proposal landing a period update.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::integration::harness::{
        exec_params, sample_txs, signature_set, GovernanceHarness, GuardHarness,
        RecordingExecutor, EXECUTION, GUARD_START, OWNER, RELAYER, TIMELOCK,
    };
    use tg_governor::ports::inbound::ProposalGovernorApi;
    use tg_guards::errors::GuardError;
    use tg_guards::ports::inbound::TransactionGuard;
    use tg_guards::ports::outbound::Freezable;
    use tg_guards::service::SimpleFreezeGuard;
    use tg_primitives::entities::ExecTransactionParams;
    use tg_primitives::hashing::keccak256;
    use tg_primitives::ports::TransactionExecutor;
    use tg_primitives::value_objects::Bytes;

    // =========================================================================
    // GUARDED HOST
    // =========================================================================

    /// Minimal guarded treasury host: runs the guard's pre-check, executes
    /// through the executor on approval, then fires the post-hook. The
    /// guard vetoing leaves the executor untouched.
    struct GuardedHost {
        guard: Arc<dyn TransactionGuard>,
        executor: Arc<RecordingExecutor>,
    }

    impl GuardedHost {
        async fn exec_transaction(
            &self,
            params: &ExecTransactionParams,
            signatures: &Bytes,
            nonce: u64,
        ) -> Result<bool, GuardError> {
            self.guard.check_transaction(params, signatures).await?;

            let data = self.executor.encode_transaction_data(params, nonce);
            let tx_hash = keccak256(data.as_slice());
            let success = self
                .executor
                .exec(params.to, params.value, &params.data, params.operation)
                .await
                .expect("recording executor never fails transport");

            self.guard.check_after_execution(tx_hash, success).await;
            Ok(success)
        }
    }

    // =========================================================================
    // TIMELOCKED EXECUTION
    // =========================================================================

    /// Announce → wait out the delay → execute through the host.
    #[tokio::test]
    async fn test_timelocked_transaction_end_to_end() {
        let h = GuardHarness::new(GUARD_START);
        let host = GuardedHost {
            guard: h.guard.clone() as Arc<dyn TransactionGuard>,
            executor: h.executor.clone(),
        };
        let params = exec_params(1);
        let sigs = signature_set(1);

        h.guard
            .timelock_transaction(RELAYER, &params, &sigs, 0)
            .await
            .unwrap();

        // Premature attempt is vetoed before the executor sees anything
        assert!(matches!(
            host.exec_transaction(&params, &sigs, 0).await,
            Err(GuardError::Timelocked { .. })
        ));
        assert_eq!(h.executor.call_count(), 0);

        h.env.advance(TIMELOCK);
        assert!(host.exec_transaction(&params, &sigs, 0).await.unwrap());
        assert_eq!(h.executor.call_count(), 1);
    }

    /// A freeze struck after the announcement kills the record for good;
    /// the executor never runs it, before or after unfreezing.
    #[tokio::test]
    async fn test_freeze_blocks_guarded_execution() {
        let h = GuardHarness::new(GUARD_START);
        let host = GuardedHost {
            guard: h.guard.clone() as Arc<dyn TransactionGuard>,
            executor: h.executor.clone(),
        };
        let params = exec_params(1);
        let sigs = signature_set(1);

        h.guard
            .timelock_transaction(RELAYER, &params, &sigs, 0)
            .await
            .unwrap();
        h.freeze.freeze(GUARD_START + 10);
        h.env.advance(TIMELOCK);

        assert!(matches!(
            host.exec_transaction(&params, &sigs, 0).await,
            Err(GuardError::TimelockedBeforeFreeze)
        ));
        h.freeze.unfreeze();
        assert!(matches!(
            host.exec_transaction(&params, &sigs, 0).await,
            Err(GuardError::TimelockedBeforeFreeze)
        ));
        assert_eq!(h.executor.call_count(), 0);
    }

    /// Swapping the timelock guard for the bare freeze guard removes the
    /// announcement requirement but keeps the kill switch.
    #[tokio::test]
    async fn test_simple_guard_swap() {
        let h = GuardHarness::new(GUARD_START);
        let host = GuardedHost {
            guard: Arc::new(SimpleFreezeGuard::new(
                h.freeze.clone() as Arc<dyn Freezable>
            )) as Arc<dyn TransactionGuard>,
            executor: h.executor.clone(),
        };
        let params = exec_params(1);
        let sigs = signature_set(1);

        // No announcement needed
        assert!(host.exec_transaction(&params, &sigs, 0).await.unwrap());

        h.freeze.freeze(GUARD_START);
        assert_eq!(
            host.exec_transaction(&params, &sigs, 0).await,
            Err(GuardError::DaoFrozen)
        );

        h.freeze.unfreeze();
        assert!(host.exec_transaction(&params, &sigs, 0).await.unwrap());
        assert_eq!(h.executor.call_count(), 2);
    }

    // =========================================================================
    // GOVERNANCE OF THE GUARD
    // =========================================================================

    /// A passed governor proposal carries a guard-parameter change: once
    /// the proposal executes, the guard's period moves and existing
    /// records feel it immediately.
    #[tokio::test]
    async fn test_governor_proposal_updates_guard_period() {
        let gov = GovernanceHarness::new();
        let guards = GuardHarness::new(GUARD_START);

        // A record pending under the original delay
        let params = exec_params(9);
        let sigs = signature_set(9);
        guards
            .guard
            .timelock_transaction(RELAYER, &params, &sigs, 0)
            .await
            .unwrap();
        guards.env.advance(10);
        assert!(matches!(
            guards.guard.check_transaction(&params, &sigs).await,
            Err(GuardError::Timelocked { .. })
        ));

        // The DAO votes the delay down to 5 seconds
        let txs = sample_txs(1);
        let id = gov.submit(txs.clone()).await;
        gov.enter_execution_window();
        gov.governor.execute_proposal(id, txs).await.unwrap();
        assert_eq!(gov.executor.call_count(), 1);

        // The host applies the approved change to the guard
        guards.guard.update_timelock_period(OWNER, 5).await.unwrap();
        assert_eq!(guards.guard.timelock_period().await, 5);
        assert_eq!(guards.guard.execution_period().await, EXECUTION);

        // The pending record is now inside its window
        assert_eq!(guards.guard.check_transaction(&params, &sigs).await, Ok(()));
    }
}
