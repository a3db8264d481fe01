// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

/// The default path to the deployment manifest.
pub const DEFAULT_MANIFEST_PATH: &str = bridge_tools::core::config::MANIFEST_FILENAME;

/// The default path to the untracked secret file holding the account mnemonic.
pub const DEFAULT_SECRET_PATH: &str = bridge_tools::core::config::SECRET_FILENAME;

/// The default directory for compiled contract artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
