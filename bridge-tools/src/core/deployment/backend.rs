// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;

use crate::core::{
    config::GasSettings,
    deployment::{DeploymentError, DeploymentRequest},
};

sol! {
    interface Ownable {
        function transferOwnership(address newOwner) external;
    }
}

/// The chain operations a deployment run needs.
///
/// The plan executor is written against this seam so it can run against a
/// mock chain in tests.
#[async_trait]
pub trait ChainBackend {
    /// Submits a contract-creation transaction and blocks until the network
    /// confirms the resulting address.
    async fn deploy(&self, init_code: Vec<u8>) -> Result<Address, DeploymentError>;

    /// Calls `transferOwnership(new_owner)` on `contract` and blocks until
    /// the transaction confirms.
    async fn transfer_ownership(
        &self,
        contract: Address,
        new_owner: Address,
    ) -> Result<TxHash, DeploymentError>;
}

/// [`ChainBackend`] over a live RPC provider with a signing wallet.
#[derive(Debug)]
pub struct RpcBackend<'a, P> {
    provider: &'a P,
    gas: GasSettings,
}

impl<'a, P> RpcBackend<'a, P> {
    pub fn new(provider: &'a P, gas: GasSettings) -> Self {
        Self { provider, gas }
    }
}

#[async_trait]
impl<P: Provider + WalletProvider> ChainBackend for RpcBackend<'_, P> {
    async fn deploy(&self, init_code: Vec<u8>) -> Result<Address, DeploymentError> {
        let sender = self.provider.default_signer_address();
        let req = DeploymentRequest::new(sender, init_code, &self.gas);
        let receipt = req.exec(self.provider).await?;
        receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress)
    }

    async fn transfer_ownership(
        &self,
        contract: Address,
        new_owner: Address,
    ) -> Result<TxHash, DeploymentError> {
        let calldata = Ownable::transferOwnershipCall { newOwner: new_owner }.abi_encode();
        let tx = TransactionRequest::default()
            .with_from(self.provider.default_signer_address())
            .with_to(contract)
            .with_input(calldata)
            .with_gas_limit(self.gas.limit)
            .with_gas_price(self.gas.price_wei());

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        Ok(receipt.transaction_hash)
    }
}
