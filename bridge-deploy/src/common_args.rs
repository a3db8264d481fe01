// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{coins_bip39::English, MnemonicBuilder},
        Signer,
    },
};
use bridge_tools::core::{
    config::{DeployManifest, GasSettings, Secret},
    network::{check_endpoint, verify_chain_id},
};

use crate::constants::{DEFAULT_MANIFEST_PATH, DEFAULT_SECRET_PATH};

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the deployment manifest.
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    pub config: PathBuf,
    /// Path to the untracked secret file holding the account mnemonic.
    #[arg(long, default_value = DEFAULT_SECRET_PATH)]
    pub secret: PathBuf,
    /// Network to operate on (a key of [networks] in the manifest).
    #[arg(short, long)]
    pub network: String,
}

impl ConfigArgs {
    pub fn manifest(&self) -> eyre::Result<DeployManifest> {
        Ok(DeployManifest::load(&self.config)?)
    }

    /// Builds a read-only provider for the selected network.
    pub async fn build_provider(&self, manifest: &DeployManifest) -> eyre::Result<impl Provider> {
        let network = manifest.network(&self.network)?;
        check_endpoint(&network.url)?;
        let provider = ProviderBuilder::new().connect(&network.url).await?;
        verify_chain_id(network, provider.get_chain_id().await?)?;
        Ok(provider)
    }

    /// Builds a provider with the mnemonic-derived signing wallet attached.
    pub async fn build_provider_with_wallet(
        &self,
        manifest: &DeployManifest,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let network = manifest.network(&self.network)?;
        check_endpoint(&network.url)?;
        let wallet = build_wallet(&Secret::load(&self.secret)?, network.chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&network.url)
            .await?;
        verify_chain_id(network, provider.get_chain_id().await?)?;
        Ok(provider)
    }
}

fn build_wallet(secret: &Secret, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let signer = MnemonicBuilder::<English>::default()
        .phrase(secret.mnemonic.trim())
        .index(0)?
        .build()?
        .with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct GasArgs {
    /// Gas limit for each transaction (overrides the manifest).
    #[arg(long)]
    gas_limit: Option<u64>,
    /// Legacy gas price in gwei for each transaction (overrides the manifest).
    #[arg(long)]
    gas_price_gwei: Option<u64>,
}

impl GasArgs {
    pub fn settings(&self, manifest: &DeployManifest) -> GasSettings {
        let mut gas = manifest.gas.clone();
        if let Some(limit) = self.gas_limit {
            gas.limit = limit;
        }
        if let Some(price) = self.gas_price_gwei {
            gas.price_gwei = price;
        }
        gas
    }
}
