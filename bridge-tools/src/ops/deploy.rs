// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Suite deployment.

use std::path::Path;

use alloy::providers::{Provider, WalletProvider};

use crate::core::{
    artifact::ArtifactStore,
    config::{DeployManifest, GasSettings},
    deployment::{check_funds, plan::bridge_suite, run_plan, PlanOutcome},
    explorer::Explorer,
};

/// Deploys the bridge contract suite to the selected network.
///
/// Every transaction is confirmed before the next is submitted; any failure
/// aborts the run and bubbles up to the process boundary.
pub async fn deploy(
    manifest: &DeployManifest,
    network_name: &str,
    artifacts_dir: &Path,
    gas: &GasSettings,
    provider: &(impl Provider + WalletProvider),
) -> crate::Result<PlanOutcome> {
    let network = manifest.network(network_name)?;
    greyln!(
        "deploying the bridge suite to {network_name} (chain id {})",
        network.chain_id
    );
    greyln!(
        "expecting artifacts from solc {} (optimizer runs: {})",
        manifest.compiler.version,
        manifest.compiler.optimizer.runs
    );

    let plan = bridge_suite(&manifest.contracts);
    let artifacts = ArtifactStore::load_for_plan(artifacts_dir, &plan)?;
    check_funds(&plan, gas, provider).await?;

    let backend = crate::core::deployment::backend::RpcBackend::new(provider, gas.clone());
    let outcome = run_plan(&plan, &artifacts, &backend).await?;

    if let Some(explorer) = Explorer::for_network(&manifest.explorer, network_name, network.chain_id)
    {
        for (id, address) in &outcome.addresses {
            if let Some(url) = explorer.address_url(*address) {
                debug!(@grey, "{id}: {url}");
            }
        }
    }

    Ok(outcome)
}

/// Validates the plan and artifacts and prints the steps without submitting
/// anything.
pub fn dry_run(
    manifest: &DeployManifest,
    network_name: &str,
    artifacts_dir: &Path,
) -> crate::Result<()> {
    let network = manifest.network(network_name)?;
    let plan = bridge_suite(&manifest.contracts);
    plan.validate()?;
    ArtifactStore::load_for_plan(artifacts_dir, &plan)?;

    greyln!(
        "deployment plan for {network_name} (chain id {}):",
        network.chain_id
    );
    for (index, step) in plan.steps.iter().enumerate() {
        let args: Vec<String> = step.args.iter().map(|arg| arg.to_string()).collect();
        greyln!("  {}. {}({})", index + 1, step.id, args.join(", "));
    }
    if let Some(handover) = &plan.handover {
        greyln!(
            "  then: {}.transferOwnership({}.address)",
            handover.contract,
            handover.new_owner
        );
    }
    Ok(())
}
