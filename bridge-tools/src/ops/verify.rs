// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Deployment verification.

use std::path::Path;

use alloy::{primitives::TxHash, providers::Provider};

use crate::core::{
    artifact::ContractArtifact,
    config::DeployManifest,
    deployment::plan::StepId,
    explorer::Explorer,
    verification::{self, VerificationError, VerificationStatus},
};

/// Verifies a deployment transaction against the local artifact, then asks
/// the block explorer (when one is configured) whether source is verified.
pub async fn verify(
    manifest: &DeployManifest,
    network_name: &str,
    artifacts_dir: &Path,
    contract: StepId,
    tx_hash: TxHash,
    constructor_args: &[String],
    provider: &impl Provider,
) -> crate::Result<()> {
    let network = manifest.network(network_name)?;
    let artifact = ContractArtifact::load(artifacts_dir, contract.contract_name())?;

    match verification::verify(&artifact, constructor_args, tx_hash, provider).await? {
        VerificationStatus::Success => {
            greyln!("{contract} deployment matches the local artifact");
        }
        VerificationStatus::Failure(failure) => {
            return Err(VerificationError::Mismatch(failure).into());
        }
    }

    let Some(explorer) = Explorer::for_network(&manifest.explorer, network_name, network.chain_id)
    else {
        return Ok(());
    };
    let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? else {
        return Ok(());
    };
    let Some(address) = receipt.contract_address else {
        return Ok(());
    };
    match explorer.is_verified(address).await {
        Ok(true) => greyln!("source is verified on the block explorer"),
        Ok(false) => greyln!("source is not yet verified on the block explorer"),
        Err(err) => debug!(@grey, "explorer lookup failed: {err}"),
    }
    Ok(())
}
