// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/bridge-deploy/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod config;
pub mod deployment;
pub mod explorer;
pub mod network;
pub mod verification;
