// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type BridgeDeployResult = Result<(), BridgeDeployError>;

#[derive(Debug)]
pub struct BridgeDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl BridgeDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for BridgeDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for BridgeDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for BridgeDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::Error> for BridgeDeployError {
    fn from(err: bridge_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::core::config::ConfigError> for BridgeDeployError {
    fn from(err: bridge_tools::core::config::ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::core::network::NetworkError> for BridgeDeployError {
    fn from(err: bridge_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::core::artifact::ArtifactError> for BridgeDeployError {
    fn from(err: bridge_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::core::deployment::DeploymentError> for BridgeDeployError {
    fn from(err: bridge_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<bridge_tools::core::verification::VerificationError> for BridgeDeployError {
    fn from(err: bridge_tools::core::verification::VerificationError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
