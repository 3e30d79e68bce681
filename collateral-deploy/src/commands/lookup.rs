// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use collateral_tools::ops;

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token address, in any letter case
    address: String,
}

pub fn exec(args: Args) -> CliResult {
    ops::lookup(&args.address);
    Ok(())
}
