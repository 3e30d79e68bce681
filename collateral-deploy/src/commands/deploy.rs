// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::Provider;
use collateral_tools::{
    core::{factory::ChainFactory, plugins::Plugin},
    ops,
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, NetworkArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Collateral plugin to deploy
    plugin: Plugin,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let artifacts = args.artifacts.store()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let chain_id = provider.get_chain_id().await?;
    let ctx = args.network.context(chain_id)?;

    let factory = ChainFactory::new(provider, artifacts);
    ops::deploy(&ctx, args.plugin, &factory, factory.deployer()).await?;
    Ok(())
}
