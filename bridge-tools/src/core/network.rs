// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

use crate::core::config::NetworkConfig;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("endpoint is not an http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("chain id mismatch: manifest says {configured}, node reports {actual}")]
    ChainIdMismatch { configured: u64, actual: u64 },
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(NetworkError::InvalidEndpoint(endpoint.to_string()))
    }
}

/// Cross-checks the chain id reported by the node against the manifest.
///
/// Deploying against the wrong chain would burn the whole suite onto an
/// unintended network, so a mismatch is fatal before the first transaction.
pub fn verify_chain_id(network: &NetworkConfig, actual: u64) -> Result<(), NetworkError> {
    if network.chain_id == actual {
        Ok(())
    } else {
        Err(NetworkError::ChainIdMismatch {
            configured: network.chain_id,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_schemes() {
        assert!(check_endpoint("https://opbnb-testnet-rpc.bnbchain.org").is_ok());
        assert!(check_endpoint("http://localhost:8545").is_ok());
        assert!(check_endpoint("ws://localhost:8546").is_err());
        assert!(check_endpoint("/tmp/geth.ipc").is_err());
    }

    #[test]
    fn chain_id_cross_check() {
        let network = NetworkConfig {
            url: "https://bsc-testnet.example/rpc".to_string(),
            chain_id: 97,
        };
        assert!(verify_chain_id(&network, 97).is_ok());
        assert!(matches!(
            verify_chain_id(&network, 56),
            Err(NetworkError::ChainIdMismatch {
                configured: 97,
                actual: 56
            })
        ));
    }
}
