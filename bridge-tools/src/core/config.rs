// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{address, Address};
use serde::Deserialize;

/// Filename for the tracked deployment manifest.
pub const MANIFEST_FILENAME: &str = "Deploy.toml";

/// Filename for the untracked secret file holding the account mnemonic.
pub const SECRET_FILENAME: &str = "secret.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("json read error: {0}")]
    JsonRead(#[from] serde_json::Error),

    #[error("missing deployment manifest: {}", .0.display())]
    MissingManifest(PathBuf),

    #[error("missing secret file: {} (expected {{ \"mnemonic\": \"...\" }})", .0.display())]
    MissingSecret(PathBuf),

    #[error("secret file holds an empty mnemonic")]
    EmptyMnemonic,

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

/// The full deployment manifest, loaded once at startup and never mutated.
///
/// Everything the deployment run needs apart from the account mnemonic lives
/// here: the compiler settings the artifacts are expected to come from, the
/// target networks, block explorer credentials, gas settings and the suite
/// parameters wired into constructors.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployManifest {
    pub compiler: CompilerConfig,

    /// Target networks, keyed by the name given on the command line.
    pub networks: HashMap<String, NetworkConfig>,

    #[serde(default)]
    pub explorer: ExplorerConfig,

    #[serde(default)]
    pub gas: GasSettings,

    #[serde(default)]
    pub contracts: SuiteConfig,
}

impl DeployManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingManifest(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let manifest = toml::from_str(&contents)?;
        Ok(manifest)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }
}

/// Compiler settings the build artifacts are expected to come from.
///
/// The tool does not compile anything itself; these are surfaced at deploy
/// time and reported alongside verification results.
#[derive(Debug, Clone, Deserialize)]
pub struct CompilerConfig {
    /// The solc version, e.g. `0.8.19`.
    pub version: String,
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

/// A single target network.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// HTTP(S) RPC endpoint.
    pub url: String,
    /// Numeric chain identifier, cross-checked against the node after
    /// connecting.
    pub chain_id: u64,
}

/// Block explorer credentials, used after deployment for verification and
/// browser links.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerConfig {
    /// Per-network API keys.
    #[serde(default)]
    pub api_keys: HashMap<String, String>,

    /// Explorers that are not covered by the built-in defaults.
    #[serde(default)]
    pub custom_chains: Vec<CustomChain>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomChain {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}

/// Explicit gas settings attached to every submitted transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct GasSettings {
    #[serde(default = "default_gas_limit")]
    pub limit: u64,

    /// Legacy gas price, in gwei.
    #[serde(default = "default_gas_price_gwei")]
    pub price_gwei: u64,
}

impl GasSettings {
    pub fn price_wei(&self) -> u128 {
        self.price_gwei as u128 * 1_000_000_000
    }
}

impl Default for GasSettings {
    fn default() -> Self {
        Self {
            limit: default_gas_limit(),
            price_gwei: default_gas_price_gwei(),
        }
    }
}

fn default_gas_limit() -> u64 {
    10_000_000
}

fn default_gas_price_gwei() -> u64 {
    200
}

/// Parameters wired into the suite's constructors.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// External fee receiver passed to the Settings constructor.
    #[serde(default = "default_fee_receiver")]
    pub fee_receiver: Address,

    #[serde(default = "default_nft_name")]
    pub nft_name: String,

    #[serde(default = "default_nft_symbol")]
    pub nft_symbol: String,

    #[serde(default = "default_nft_supply")]
    pub nft_supply: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            fee_receiver: default_fee_receiver(),
            nft_name: default_nft_name(),
            nft_symbol: default_nft_symbol(),
            nft_supply: default_nft_supply(),
        }
    }
}

fn default_fee_receiver() -> Address {
    address!("c3A1D9C337c4E1EeFC95AD4d1418a5e04F365C6a")
}

fn default_nft_name() -> String {
    "testNFT".to_string()
}

fn default_nft_symbol() -> String {
    "TNFT".to_string()
}

fn default_nft_supply() -> String {
    "1000".to_string()
}

/// The account mnemonic, read from an untracked local file.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    pub mnemonic: String,
}

impl Secret {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingSecret(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let secret: Secret = serde_json::from_str(&contents)?;
        if secret.mnemonic.trim().is_empty() {
            return Err(ConfigError::EmptyMnemonic);
        }
        Ok(secret)
    }
}
