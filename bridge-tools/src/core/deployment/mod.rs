// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{
    core::{
        artifact::{ArtifactError, ArtifactStore},
        config::GasSettings,
        deployment::{
            backend::ChainBackend,
            plan::{DeployStep, DeploymentPlan, PlanError, StepArg, StepId},
        },
    },
    utils::color::{Color, DebugColor},
};

pub mod backend;
pub mod plan;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to cover the deployment\n\
         balance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .required).yellow(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        required: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt")]
    NoContractAddress,
}

/// A contract-creation transaction carrying the explicit gas settings from
/// the manifest.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Vec<u8>, gas: &GasSettings) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code)
                .with_gas_limit(gas.limit)
                .with_gas_price(gas.price_wei()),
        }
    }

    pub fn tx(&self) -> &TransactionRequest {
        &self.tx
    }

    /// Submits the transaction and blocks until the network confirms it.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let pending = provider.send_transaction(self.tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }
}

/// The result of a completed run: confirmed addresses in deployment order,
/// plus the handover transaction hash.
///
/// Nothing here is persisted; a re-run deploys six fresh instances.
#[derive(Debug, Default)]
pub struct PlanOutcome {
    pub addresses: Vec<(StepId, Address)>,
    pub handover_tx: Option<TxHash>,
}

impl PlanOutcome {
    pub fn address(&self, id: StepId) -> Option<Address> {
        self.addresses
            .iter()
            .find(|(step, _)| *step == id)
            .map(|(_, address)| *address)
    }
}

/// Executes the plan strictly in order, one confirmed transaction at a time.
///
/// Constructor arguments referencing earlier steps are resolved against the
/// addresses confirmed so far, so no step is submitted before all of its
/// dependencies have landed. Any failure aborts the run immediately; there is
/// no retry and no rollback of already-deployed contracts.
pub async fn run_plan<B: ChainBackend>(
    plan: &DeploymentPlan,
    artifacts: &ArtifactStore,
    backend: &B,
) -> Result<PlanOutcome, DeploymentError> {
    plan.validate()?;

    let mut outcome = PlanOutcome::default();
    for step in &plan.steps {
        let args = resolve_args(step, &outcome)?;
        let artifact = artifacts.get(step.id.contract_name())?;
        let init_code = artifact.init_code(&args)?;
        let address = backend.deploy(init_code).await?;
        info!(@grey, "{} deployed at: {}", step.id, address.debug_lavender());
        outcome.addresses.push((step.id, address));
    }

    if let Some(handover) = &plan.handover {
        let contract = outcome
            .address(handover.contract)
            .ok_or(PlanError::UnknownHandoverParty(handover.contract))?;
        let new_owner = outcome
            .address(handover.new_owner)
            .ok_or(PlanError::UnknownHandoverParty(handover.new_owner))?;
        let tx_hash = backend.transfer_ownership(contract, new_owner).await?;
        info!(
            @grey,
            "{} ownership transferred to {}: {}",
            handover.contract,
            handover.new_owner,
            tx_hash.debug_lavender()
        );
        outcome.handover_tx = Some(tx_hash);
    }

    Ok(outcome)
}

fn resolve_args(step: &DeployStep, outcome: &PlanOutcome) -> Result<Vec<String>, PlanError> {
    step.args
        .iter()
        .map(|arg| match arg {
            StepArg::Address(dependency) => outcome
                .address(*dependency)
                .map(|address| address.to_string())
                .ok_or(PlanError::MissingDependency {
                    step: step.id,
                    dependency: *dependency,
                }),
            StepArg::Literal(value) => Ok(value.clone()),
        })
        .collect()
}

/// Checks the signer balance against the worst case for the whole run before
/// the first transaction goes out.
pub async fn check_funds(
    plan: &DeploymentPlan,
    gas: &GasSettings,
    provider: &(impl Provider + WalletProvider),
) -> Result<(), DeploymentError> {
    let from_address = provider.default_signer_address();
    debug!(@grey, "sender address: {}", from_address.debug_lavender());

    let tx_count = plan.steps.len() as u64 + plan.handover.is_some() as u64;
    let required = U256::from(gas.limit) * U256::from(gas.price_wei()) * U256::from(tx_count);
    let balance = provider
        .get_balance(from_address)
        .await
        .map_err(|_| DeploymentError::FailedToGetBalance)?;
    if balance < required {
        return Err(DeploymentError::NotEnoughFunds {
            from_address,
            balance,
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        artifact::ContractArtifact,
        config::SuiteConfig,
        deployment::plan::{bridge_suite, OwnershipTransfer},
    };
    use alloy::primitives::B256;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Deterministic in-memory chain: addresses 0x..01, 0x..02, ... in
    /// submission order.
    #[derive(Debug, Default)]
    struct MockChain {
        deployments: Mutex<Vec<Vec<u8>>>,
        transfers: Mutex<Vec<(Address, Address)>>,
        fail_at: Option<usize>,
    }

    impl MockChain {
        fn failing_at(step: usize) -> Self {
            Self {
                fail_at: Some(step),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ChainBackend for MockChain {
        async fn deploy(&self, init_code: Vec<u8>) -> Result<Address, DeploymentError> {
            let mut deployments = self.deployments.lock().unwrap();
            if self.fail_at == Some(deployments.len()) {
                return Err(DeploymentError::Reverted { tx_hash: B256::ZERO });
            }
            deployments.push(init_code);
            Ok(Address::with_last_byte(deployments.len() as u8))
        }

        async fn transfer_ownership(
            &self,
            contract: Address,
            new_owner: Address,
        ) -> Result<TxHash, DeploymentError> {
            self.transfers.lock().unwrap().push((contract, new_owner));
            Ok(B256::with_last_byte(0xff))
        }
    }

    fn artifact(name: &str, ctor_inputs: &[(&str, &str)], bytecode: &str) -> ContractArtifact {
        let abi = if ctor_inputs.is_empty() {
            serde_json::json!([])
        } else {
            let inputs: Vec<_> = ctor_inputs
                .iter()
                .map(|(name, ty)| {
                    serde_json::json!({"name": name, "type": ty, "internalType": ty})
                })
                .collect();
            serde_json::json!([{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": inputs
            }])
        };
        serde_json::from_value(serde_json::json!({
            "contractName": name,
            "abi": abi,
            "bytecode": bytecode
        }))
        .unwrap()
    }

    fn suite_artifacts() -> ArtifactStore {
        let mut store = ArtifactStore::default();
        store.insert(artifact("Controller", &[], "0x6001"));
        store.insert(artifact(
            "Settings",
            &[("controller", "address"), ("feeReceiver", "address")],
            "0x6002",
        ));
        store.insert(artifact(
            "FeeController",
            &[("controller", "address"), ("settings", "address")],
            "0x6003",
        ));
        store.insert(artifact("Registry", &[], "0x6004"));
        store.insert(artifact(
            "Bridge",
            &[
                ("controller", "address"),
                ("settings", "address"),
                ("registry", "address"),
                ("feeController", "address"),
            ],
            "0x6005",
        ));
        store.insert(artifact(
            "SimpleNFT",
            &[("name", "string"), ("symbol", "string"), ("supply", "uint256")],
            "0x6006",
        ));
        store
    }

    fn addr(n: u8) -> Address {
        Address::with_last_byte(n)
    }

    #[tokio::test]
    async fn runs_suite_in_order_with_wired_args() {
        let suite = SuiteConfig::default();
        let plan = bridge_suite(&suite);
        let artifacts = suite_artifacts();
        let chain = MockChain::default();

        let outcome = run_plan(&plan, &artifacts, &chain).await.unwrap();

        assert_eq!(
            outcome.addresses,
            vec![
                (StepId::Controller, addr(1)),
                (StepId::Settings, addr(2)),
                (StepId::FeeController, addr(3)),
                (StepId::Registry, addr(4)),
                (StepId::Bridge, addr(5)),
                (StepId::SimpleNft, addr(6)),
            ]
        );

        // each submitted init code matches the artifact encoding for the
        // addresses confirmed before it
        let deployments = chain.deployments.lock().unwrap();
        assert_eq!(deployments.len(), 6);
        let expected_settings = artifacts
            .get("Settings")
            .unwrap()
            .init_code(&[addr(1).to_string(), suite.fee_receiver.to_string()])
            .unwrap();
        assert_eq!(deployments[1], expected_settings);
        let expected_bridge = artifacts
            .get("Bridge")
            .unwrap()
            .init_code(&[
                addr(1).to_string(),
                addr(2).to_string(),
                addr(4).to_string(),
                addr(3).to_string(),
            ])
            .unwrap();
        assert_eq!(deployments[4], expected_bridge);

        // registry handed over to the bridge, strictly after both confirmed
        let transfers = chain.transfers.lock().unwrap();
        assert_eq!(*transfers, vec![(addr(4), addr(5))]);
        assert_eq!(outcome.handover_tx, Some(B256::with_last_byte(0xff)));
    }

    #[tokio::test]
    async fn failure_aborts_remaining_steps() {
        let plan = bridge_suite(&SuiteConfig::default());
        let artifacts = suite_artifacts();
        let chain = MockChain::failing_at(2);

        let err = run_plan(&plan, &artifacts, &chain).await.unwrap_err();
        assert!(matches!(err, DeploymentError::Reverted { .. }));

        // the failed FeeController step left nothing behind it
        assert_eq!(chain.deployments.lock().unwrap().len(), 2);
        assert!(chain.transfers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rerun_deploys_fresh_instances() {
        let plan = bridge_suite(&SuiteConfig::default());
        let artifacts = suite_artifacts();
        let chain = MockChain::default();

        let first = run_plan(&plan, &artifacts, &chain).await.unwrap();
        let second = run_plan(&plan, &artifacts, &chain).await.unwrap();

        for (id, address) in &second.addresses {
            assert_ne!(first.address(*id), Some(*address));
        }
    }

    #[tokio::test]
    async fn handover_requires_deployed_parties() {
        let plan = DeploymentPlan {
            steps: vec![DeployStep {
                id: StepId::Registry,
                args: vec![],
            }],
            handover: Some(OwnershipTransfer {
                contract: StepId::Registry,
                new_owner: StepId::Bridge,
            }),
        };
        let artifacts = suite_artifacts();
        let chain = MockChain::default();

        let err = run_plan(&plan, &artifacts, &chain).await.unwrap_err();
        assert!(matches!(
            err,
            DeploymentError::Plan(PlanError::UnknownHandoverParty(StepId::Bridge))
        ));
        assert!(chain.transfers.lock().unwrap().is_empty());
    }

    #[test]
    fn request_carries_explicit_gas() {
        let gas = GasSettings::default();
        let req = DeploymentRequest::new(addr(0xaa), vec![0x60, 0x01], &gas);
        let tx = req.tx();
        assert_eq!(tx.gas, Some(10_000_000));
        assert_eq!(tx.gas_price, Some(200_000_000_000));
        assert!(tx.to.is_none() || tx.to == Some(alloy::primitives::TxKind::Create));
    }
}
