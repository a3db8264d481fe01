// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The suite is compiled by the solidity toolchain ahead of time; this module
//! loads the resulting artifact JSON (`contractName`, `abi`, `bytecode`) and
//! assembles creation init code from it.

use std::{collections::HashMap, fs, path::Path};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, JsonAbi},
};
use serde::Deserialize;

use crate::core::deployment::plan::DeploymentPlan;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json read error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no build artifact for contract: {0}")]
    Missing(String),

    #[error("invalid bytecode hex: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),

    #[error("artifact for {0} has no deployable bytecode")]
    NoBytecode(String),

    #[error("invalid constructor: {0}")]
    ConstructorMismatch(String),

    #[error("abi encoding error: {0}")]
    AbiEncode(#[from] alloy::dyn_abi::Error),
}

/// A compiled contract, as emitted by the solidity build.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode, 0x-prefixed hex.
    pub bytecode: String,
}

impl ContractArtifact {
    /// Loads `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = dir.join(name).with_extension("json");
        if !path.exists() {
            return Err(ArtifactError::Missing(name.to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    pub fn bytecode_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        let text = self.bytecode.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = hex::decode(text)?;
        if bytes.is_empty() {
            return Err(ArtifactError::NoBytecode(self.contract_name.clone()));
        }
        Ok(bytes)
    }

    /// Assembles the creation init code: bytecode followed by the
    /// ABI-encoded constructor arguments.
    ///
    /// Arguments arrive as strings and are coerced against the constructor's
    /// parameter types, so addresses, numbers and text all take their on-disk
    /// manifest form.
    pub fn init_code(&self, args: &[String]) -> Result<Vec<u8>, ArtifactError> {
        let mut code = self.bytecode_bytes()?;
        match self.constructor() {
            Some(constructor) => {
                if args.len() != constructor.inputs.len() {
                    return Err(ArtifactError::ConstructorMismatch(format!(
                        "mismatched number of constructor arguments for {} (want {:?} ({}); got {})",
                        self.contract_name,
                        constructor.inputs,
                        constructor.inputs.len(),
                        args.len(),
                    )));
                }
                let mut values = Vec::<DynSolValue>::with_capacity(args.len());
                for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
                    let ty = param.resolve().map_err(|err| {
                        ArtifactError::ConstructorMismatch(format!(
                            "could not resolve constructor arg {param}: {err}"
                        ))
                    })?;
                    let value = ty.coerce_str(arg).map_err(|err| {
                        ArtifactError::ConstructorMismatch(format!(
                            "could not parse constructor arg {param}: {err}"
                        ))
                    })?;
                    values.push(value);
                }
                code.extend(constructor.abi_encode_input_raw(&values)?);
            }
            None if !args.is_empty() => {
                return Err(ArtifactError::ConstructorMismatch(format!(
                    "{} has no constructor but {} arguments were provided",
                    self.contract_name,
                    args.len(),
                )));
            }
            None => {}
        }
        Ok(code)
    }
}

/// Every artifact a deployment plan references, loaded up front so a missing
/// or broken artifact fails before the first transaction is submitted.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    artifacts: HashMap<String, ContractArtifact>,
}

impl ArtifactStore {
    pub fn load_for_plan(dir: &Path, plan: &DeploymentPlan) -> Result<Self, ArtifactError> {
        let mut store = Self::default();
        for step in &plan.steps {
            let name = step.id.contract_name();
            if !store.artifacts.contains_key(name) {
                store.insert(ContractArtifact::load(dir, name)?);
            }
        }
        Ok(store)
    }

    pub fn insert(&mut self, artifact: ContractArtifact) {
        self.artifacts.insert(artifact.contract_name.clone(), artifact);
    }

    pub fn get(&self, name: &str) -> Result<&ContractArtifact, ArtifactError> {
        self.artifacts
            .get(name)
            .ok_or_else(|| ArtifactError::Missing(name.to_string()))
    }
}
