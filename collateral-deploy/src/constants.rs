// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint, a local hardhat or anvil node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Where deployment manifests are read from and written to by default.
pub const DEFAULT_DEPLOYMENTS_DIR: &str = ".";

/// Where compiled contract artifacts are searched for by default.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
