// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use collateral_tools::ops;

use crate::error::CliResult;

pub fn exec() -> CliResult {
    ops::list_plugins();
    Ok(())
}
