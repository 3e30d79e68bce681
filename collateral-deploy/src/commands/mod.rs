// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod check;
mod deploy;
mod lookup;
mod plugins;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Check that collateral could be deployed, without deploying anything
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Deploy a collateral plugin and record it in the deployment manifest
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the symbol of a token address
    #[clap(visible_alias = "l")]
    Lookup(lookup::Args),
    /// List the collateral plugins that can be deployed
    Plugins,
    /// Print the collateral deployment manifest of a network
    #[clap(visible_alias = "s")]
    Show(show::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Check(args) => check::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Lookup(args) => lookup::exec(args),
        Command::Plugins => plugins::exec(),
        Command::Show(args) => show::exec(args).await,
    }
}
