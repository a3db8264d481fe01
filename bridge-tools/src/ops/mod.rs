// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

pub use deploy::{deploy, dry_run};
pub use verify::verify;

mod deploy;
mod verify;
