// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

//! Deployment verification against the local build artifact.
//!
//! Reconstructs the init code a deployment should have carried and compares
//! it to what the transaction actually sent.

use std::fmt;

use alloy::{
    consensus::Transaction,
    primitives::TxHash,
    providers::Provider,
};

use crate::core::artifact::{ArtifactError, ContractArtifact};

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("no transaction found for {0}")]
    NoSuchTx(TxHash),

    #[error("transaction {0} is not a contract deployment")]
    NotADeployment(TxHash),

    #[error("deployment does not match the local artifact: {0}")]
    Mismatch(VerificationFailure),
}

#[derive(Debug, PartialEq)]
pub enum VerificationStatus {
    Success,
    Failure(VerificationFailure),
}

#[derive(Debug, PartialEq)]
pub struct VerificationFailure {
    pub expected_len: usize,
    pub actual_len: usize,
    /// Offset of the first differing byte, when the lengths agree up to it.
    pub first_mismatch: Option<usize>,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expected {} bytes of init code, tx carries {}",
            self.expected_len, self.actual_len
        )?;
        if let Some(offset) = self.first_mismatch {
            write!(f, "; first difference at byte {offset}")?;
        }
        Ok(())
    }
}

/// Fetches the deployment transaction and compares its input against the
/// init code reconstructed from `artifact` and `constructor_args`.
pub async fn verify(
    artifact: &ContractArtifact,
    constructor_args: &[String],
    tx_hash: TxHash,
    provider: &impl Provider,
) -> Result<VerificationStatus, VerificationError> {
    let tx = provider
        .get_transaction_by_hash(tx_hash)
        .await?
        .ok_or(VerificationError::NoSuchTx(tx_hash))?;
    if tx.to().is_some() {
        return Err(VerificationError::NotADeployment(tx_hash));
    }

    let expected = artifact.init_code(constructor_args)?;
    Ok(compare_init_code(&expected, tx.input()))
}

pub fn compare_init_code(expected: &[u8], actual: &[u8]) -> VerificationStatus {
    if expected == actual {
        return VerificationStatus::Success;
    }
    let first_mismatch = expected
        .iter()
        .zip(actual.iter())
        .position(|(a, b)| a != b);
    VerificationStatus::Failure(VerificationFailure {
        expected_len: expected.len(),
        actual_len: actual.len(),
        first_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_init_code() {
        let code = [0x60, 0x01, 0x60, 0x02];
        assert_eq!(compare_init_code(&code, &code), VerificationStatus::Success);
    }

    #[test]
    fn differing_byte_is_located() {
        let expected = [0x60, 0x01, 0x60, 0x02];
        let actual = [0x60, 0x01, 0x61, 0x02];
        assert_eq!(
            compare_init_code(&expected, &actual),
            VerificationStatus::Failure(VerificationFailure {
                expected_len: 4,
                actual_len: 4,
                first_mismatch: Some(2),
            })
        );
    }

    #[test]
    fn length_mismatch_without_differing_prefix() {
        let expected = [0x60, 0x01];
        let actual = [0x60, 0x01, 0x00];
        assert_eq!(
            compare_init_code(&expected, &actual),
            VerificationStatus::Failure(VerificationFailure {
                expected_len: 2,
                actual_len: 3,
                first_mismatch: None,
            })
        );
    }
}
