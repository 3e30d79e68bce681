// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        manifest::{self, ManifestCategory},
        plugins::{CollateralPlugin, Plugin},
        tokens,
        workflow::{self, DeploymentContext},
    },
    utils::color::Color,
};

/// Prints the phase 2 manifest of `ctx`'s network, naming known tokens.
pub fn show(ctx: &DeploymentContext) -> eyre::Result<()> {
    let path = ctx.manifest_path(workflow::PHASE);
    let deployments = manifest::load_manifest(&path)?;

    greyln!("{} ({})", path.display(), ctx.network);
    for category in [ManifestCategory::Collateral, ManifestCategory::Erc20s] {
        let entries = deployments.entries(category);
        greyln!("{category}: {}", entries.len());
        for (key, address) in entries {
            let symbol = tokens::symbol_of(address);
            if symbol == *address {
                greyln!("  {key}: {}", address.lavender());
            } else {
                greyln!("  {key}: {} ({})", address.lavender(), symbol.mint());
            }
        }
    }
    Ok(())
}

/// Prints the symbol for `address`, or `address` itself if it is not a known token.
pub fn lookup(address: &str) {
    println!("{}", tokens::symbol_of(address));
}

/// Prints every deployable plugin.
pub fn list_plugins() {
    for plugin in Plugin::ALL {
        greyln!(
            "{} {} {} ({})",
            plugin.to_string().mint(),
            plugin.key().lavender(),
            plugin.description(),
            plugin.restriction()
        );
    }
}
