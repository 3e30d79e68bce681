// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod factory;
pub mod manifest;
pub mod network;
pub mod numbers;
pub mod plugins;
pub mod tokens;
pub mod workflow;
