// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        manifest::{ManifestError, Phase},
        plugins::{CollateralPlugin, Plugin},
        workflow::{self, DeploymentContext},
    },
    utils::color::Color,
};

/// Prints the state of the manifests on `ctx`'s network and runs the pre-deployment checks for
/// each of `plugins`.
///
/// Fails if any plugin could not be deployed right now.
pub fn check(ctx: &DeploymentContext, plugins: &[Plugin]) -> eyre::Result<()> {
    let report = workflow::check_phases(ctx)?;

    greyln!("network: {}", ctx.network.to_string().lavender());
    let present = |yes: bool| if yes { "found".mint() } else { "missing".red() };
    greyln!(
        "{}: {} ({})",
        Phase::Core,
        report.prerequisite_path.display(),
        present(report.prerequisite_present)
    );
    greyln!(
        "{}: {} ({}, {} entries)",
        workflow::PHASE,
        report.manifest_path.display(),
        present(report.manifest_present),
        report.manifest.len()
    );

    if !report.prerequisite_present {
        return Err(ManifestError::MissingPrerequisite {
            path: report.prerequisite_path,
            phase: Phase::Core,
        }
        .into());
    }

    let mut failed = 0;
    for plugin in plugins {
        match workflow::preflight(ctx, plugin) {
            Ok(_) => greyln!("{plugin} ({}): {}", plugin.key(), "ready".mint()),
            Err(err) => {
                failed += 1;
                greyln!("{plugin} ({}): {}", plugin.key(), err.to_string().red());
            }
        }
    }
    if failed > 0 {
        eyre::bail!(
            "{failed} of {} plugins cannot be deployed to {}",
            plugins.len(),
            ctx.network
        );
    }
    Ok(())
}
