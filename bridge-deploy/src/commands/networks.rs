// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use bridge_tools::core::{config::DeployManifest, explorer::Explorer};

use crate::{constants::DEFAULT_MANIFEST_PATH, error::BridgeDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to the deployment manifest.
    #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
    config: PathBuf,
}

pub fn exec(args: Args) -> BridgeDeployResult {
    let manifest = DeployManifest::load(&args.config)?;

    let mut names: Vec<_> = manifest.networks.keys().collect();
    names.sort();
    for name in names {
        let network = &manifest.networks[name];
        println!("{name}: chain id {}, {}", network.chain_id, network.url);
        let explorer = Explorer::for_network(&manifest.explorer, name, network.chain_id);
        if let Some(url) = explorer.as_ref().and_then(|explorer| explorer.browser_url()) {
            println!("    explorer: {url}");
        }
    }
    Ok(())
}
