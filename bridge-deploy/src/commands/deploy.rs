// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use bridge_tools::ops;

use crate::{
    common_args::{ConfigArgs, GasArgs},
    constants::DEFAULT_ARTIFACTS_DIR,
    error::BridgeDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Validate the plan and artifacts without submitting any transaction.
    #[arg(long)]
    dry_run: bool,
    /// Directory holding the compiled contract artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    gas: GasArgs,
}

pub async fn exec(args: Args) -> BridgeDeployResult {
    let manifest = args.config.manifest()?;
    if args.dry_run {
        ops::dry_run(&manifest, &args.config.network, &args.artifacts)?;
        return Ok(());
    }

    let gas = args.gas.settings(&manifest);
    let provider = args.config.build_provider_with_wallet(&manifest).await?;
    ops::deploy(
        &manifest,
        &args.config.network,
        &args.artifacts,
        &gas,
        &provider,
    )
    .await?;
    Ok(())
}
