// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Operator-facing wrappers around [`crate::core`], printing progress as they go.

pub use check::check;
pub use deploy::deploy;
pub use show::{list_plugins, lookup, show};

mod check;
mod deploy;
mod show;
