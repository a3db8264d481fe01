// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use crate::error::BridgeDeployResult;

mod deploy;
mod networks;
mod verify;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the bridge contract suite
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the configured networks
    Networks(networks::Args),
    /// Verify a deployment transaction against the local artifact
    #[clap(visible_alias = "v")]
    Verify(verify::Args),
}

pub async fn exec(cmd: Command) -> BridgeDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
        Command::Verify(args) => verify::exec(args).await,
    }
}
