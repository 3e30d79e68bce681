// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Collateral deployment.

use alloy::primitives::Address;

use crate::{
    core::{
        factory::ContractFactory,
        plugins::{CollateralPlugin, Plugin},
        workflow::{self, DeploymentContext, DeploymentReport},
    },
    utils::color::Color,
};

/// Deploys `plugin` and records it, printing where it went.
pub async fn deploy(
    ctx: &DeploymentContext,
    plugin: Plugin,
    factory: &impl ContractFactory,
    deployer: Address,
) -> eyre::Result<DeploymentReport> {
    greyln!(
        "deploying {} to network {} with burner account {}",
        plugin.description().mint(),
        ctx.network.to_string().lavender(),
        deployer.lavender()
    );

    let report = workflow::deploy_collateral(ctx, &plugin, factory).await?;

    for (key, wrapper) in &report.erc20s {
        greyln!("deployed {key} wrapper: {}", wrapper.lavender());
    }
    greyln!(
        "deployed {} collateral: {}",
        report.key,
        report.collateral.lavender()
    );
    if let Some(previous) = &report.replaced {
        greyln!("replaced previous {} collateral {}", report.key, previous.yellow());
    }

    let new_deployments = report
        .new_deployments()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    mintln!("deployed collateral to {}", report.network);
    greyln!("    new deployments: {new_deployments}");
    greyln!("    deployment file: {}", report.manifest_path.display());
    Ok(report)
}
