// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Block explorer integration: browser links for deployed contracts and a
//! probe for whether source is already verified.

use alloy::primitives::Address;
use serde::Deserialize;

use crate::core::config::ExplorerConfig;

/// Etherscan-style API for the BNB Smart Chain testnet.
pub const BSC_TESTNET_API_URL: &str = "https://api-testnet.bscscan.com/api";
pub const BSC_TESTNET_BROWSER_URL: &str = "https://testnet.bscscan.com";

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json read error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A resolved explorer for one network.
#[derive(Debug, Clone)]
pub struct Explorer {
    api_url: String,
    browser_url: Option<String>,
    api_key: Option<String>,
}

impl Explorer {
    /// Resolves the explorer for `network`: custom chains from the manifest
    /// win, then the built-in defaults by chain id.
    pub fn for_network(config: &ExplorerConfig, network: &str, chain_id: u64) -> Option<Self> {
        let api_key = config.api_keys.get(network).cloned();
        if let Some(chain) = config
            .custom_chains
            .iter()
            .find(|chain| chain.network == network || chain.chain_id == chain_id)
        {
            return Some(Self {
                api_url: chain.api_url.clone(),
                browser_url: Some(chain.browser_url.clone()),
                api_key,
            });
        }
        match chain_id {
            97 => Some(Self {
                api_url: BSC_TESTNET_API_URL.to_string(),
                browser_url: Some(BSC_TESTNET_BROWSER_URL.to_string()),
                api_key,
            }),
            _ => None,
        }
    }

    pub fn browser_url(&self) -> Option<&str> {
        self.browser_url.as_deref()
    }

    /// Browser link for a deployed contract.
    pub fn address_url(&self, address: Address) -> Option<String> {
        self.browser_url
            .as_ref()
            .map(|base| format!("{}/address/{address}", base.trim_end_matches('/')))
    }

    /// Asks the explorer whether source for `address` is already verified
    /// (the etherscan `getabi` endpoint answers with status 0 until it is).
    pub async fn is_verified(&self, address: Address) -> Result<bool, ExplorerError> {
        let mut url = format!(
            "{}?module=contract&action=getabi&address={address}",
            self.api_url
        );
        if let Some(key) = &self.api_key {
            url.push_str("&apikey=");
            url.push_str(key);
        }
        let body = reqwest::get(&url).await?.text().await?;
        parse_abi_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct AbiResponse {
    status: String,
}

fn parse_abi_response(body: &str) -> Result<bool, ExplorerError> {
    let response: AbiResponse = serde_json::from_str(body)?;
    Ok(response.status == "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CustomChain;

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            api_keys: [("bsc".to_string(), "SOMEKEY".to_string())].into(),
            custom_chains: vec![CustomChain {
                network: "opbnb".to_string(),
                chain_id: 5611,
                api_url: "https://open-platform.nodereal.io/KEY/op-bnb-testnet/contract/"
                    .to_string(),
                browser_url: "https://opbnbscan.com/".to_string(),
            }],
        }
    }

    #[test]
    fn custom_chain_wins() {
        let explorer = Explorer::for_network(&config(), "opbnb", 5611).unwrap();
        assert_eq!(explorer.browser_url(), Some("https://opbnbscan.com/"));
        let url = explorer.address_url(Address::with_last_byte(0xaa)).unwrap();
        assert!(url.starts_with("https://opbnbscan.com/address/0x"));
    }

    #[test]
    fn falls_back_to_known_chain() {
        let explorer = Explorer::for_network(&config(), "bsc", 97).unwrap();
        assert_eq!(explorer.browser_url(), Some(BSC_TESTNET_BROWSER_URL));
        assert_eq!(explorer.api_key.as_deref(), Some("SOMEKEY"));
    }

    #[test]
    fn unknown_chain_has_no_explorer() {
        assert!(Explorer::for_network(&config(), "devnet", 31337).is_none());
    }

    #[test]
    fn verified_response_parsing() {
        assert!(parse_abi_response(r#"{"status":"1","message":"OK","result":"[]"}"#).unwrap());
        assert!(!parse_abi_response(
            r#"{"status":"0","message":"NOTOK","result":"Contract source code not verified"}"#
        )
        .unwrap());
        assert!(parse_abi_response("<html>").is_err());
    }
}
