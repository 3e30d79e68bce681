// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use collateral_tools::{core::plugins::Plugin, ops};

use crate::{
    common_args::{NetworkArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Plugins to check (defaults to all of them)
    plugins: Vec<Plugin>,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let chain_id = args.network.chain_id(&args.provider).await?;
    let ctx = args.network.context(chain_id)?;
    let plugins = if args.plugins.is_empty() {
        Plugin::ALL.to_vec()
    } else {
        args.plugins
    };
    ops::check(&ctx, &plugins)?;
    Ok(())
}
