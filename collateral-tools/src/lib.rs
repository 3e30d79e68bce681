// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying collateral plugins and tracking them in deployment manifests.
//!
//! Every deployment is recorded in a per-network, per-phase JSON manifest. The [`core`] module
//! owns those manifests along with the network configuration, the contract factory abstraction
//! and the collateral plugin catalogue. [`ops`] wraps them with operator-facing output.

#[macro_use]
mod macros;

pub mod core;
pub mod ops;
pub mod utils;
