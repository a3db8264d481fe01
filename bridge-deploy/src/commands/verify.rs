// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::primitives::TxHash;
use bridge_tools::{core::deployment::plan::StepId, ops};
use eyre::eyre;

use crate::{common_args::ConfigArgs, constants::DEFAULT_ARTIFACTS_DIR, error::BridgeDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to verify (Controller, Settings, FeeController, Registry,
    /// Bridge or SimpleNFT).
    contract: String,
    /// Hash of the deployment transaction.
    #[arg(long)]
    tx_hash: TxHash,
    /// Constructor arguments the contract was deployed with.
    #[arg(long, num_args(0..), value_name = "ARGS", allow_hyphen_values = true)]
    constructor_args: Vec<String>,
    /// Directory holding the compiled contract artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

pub async fn exec(args: Args) -> BridgeDeployResult {
    let contract = StepId::from_name(&args.contract)
        .ok_or_else(|| eyre!("unknown contract: {}", args.contract))?;
    let manifest = args.config.manifest()?;
    let provider = args.config.build_provider(&manifest).await?;
    ops::verify(
        &manifest,
        &args.config.network,
        &args.artifacts,
        contract,
        args.tx_hash,
        &args.constructor_args,
        &provider,
    )
    .await?;
    Ok(())
}
