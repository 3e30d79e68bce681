// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploying a collateral plugin and recording it in the phase 2 manifest.
//!
//! Every deployment goes through the same gate: the core system must already be deployed, the
//! phase 2 manifest must be readable and the plugin must support the target network. Only a
//! collateral that reports itself [`CollateralStatus::Sound`] right after creation and again
//! after a `refresh()` is written to the manifest.

use std::{fmt, path::PathBuf};

use alloy::primitives::Address;

use super::{
    factory::{CollateralStatus, ContractFactory, FactoryError},
    manifest::{self, DeploymentManifest, ManifestCategory, ManifestError, Phase},
    network::{Network, NetworkConfig, NetworkError, NetworkRegistry},
    plugins::{CollateralPlugin, PluginError},
};

/// The phase collateral deployments belong to.
pub const PHASE: Phase = Phase::AssetCollateral;

/// Where and against what a deployment runs.
#[derive(Clone, Debug)]
pub struct DeploymentContext {
    pub network: Network,
    pub config: NetworkConfig,
    pub deployments_dir: PathBuf,
}

impl DeploymentContext {
    pub fn new(
        network: Network,
        config: NetworkConfig,
        deployments_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            network,
            config,
            deployments_dir: deployments_dir.into(),
        }
    }

    /// Looks up the configuration of `network` in `registry`.
    pub fn from_registry(
        registry: &NetworkRegistry,
        network: Network,
        deployments_dir: impl Into<PathBuf>,
    ) -> Result<Self, NetworkError> {
        let config = registry.get(network.chain_id)?.clone();
        Ok(Self::new(network, config, deployments_dir))
    }

    pub fn manifest_path(&self, phase: Phase) -> PathBuf {
        manifest::resolve_manifest_path(&self.deployments_dir, self.network.chain_id, phase)
    }
}

/// Outcome of a successful deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReport {
    pub network: Network,
    pub key: String,
    pub collateral: Address,
    pub erc20s: Vec<(String, Address)>,
    /// The collateral address previously recorded under `key`, if any.
    pub replaced: Option<String>,
    pub manifest_path: PathBuf,
}

impl DeploymentReport {
    /// Addresses created by this deployment that ended up in the manifest, collateral first.
    pub fn new_deployments(&self) -> Vec<Address> {
        std::iter::once(self.collateral)
            .chain(self.erc20s.iter().map(|(_, address)| *address))
            .collect()
    }
}

/// State of the manifests a phase 2 deployment depends on.
#[derive(Clone, Debug)]
pub struct PhaseReport {
    pub prerequisite_path: PathBuf,
    pub prerequisite_present: bool,
    pub manifest_path: PathBuf,
    pub manifest_present: bool,
    pub manifest: DeploymentManifest,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Plugin(#[from] PluginError),
    #[error("{0}")]
    Factory(#[from] FactoryError),
    #[error("{key} collateral at {address} reported {status} {stage}, expected SOUND")]
    Unhealthy {
        key: String,
        address: Address,
        status: CollateralStatus,
        stage: HealthCheck,
    },
}

/// When a collateral's status was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthCheck {
    AfterDeploy,
    AfterRefresh,
}

impl fmt::Display for HealthCheck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AfterDeploy => write!(f, "after deployment"),
            Self::AfterRefresh => write!(f, "after refresh"),
        }
    }
}

/// Runs every check [`deploy_collateral`] makes before touching the chain.
///
/// Returns the current phase 2 manifest, empty if none exists yet.
pub fn preflight(
    ctx: &DeploymentContext,
    plugin: &impl CollateralPlugin,
) -> Result<DeploymentManifest, WorkflowError> {
    if let Some(prerequisite) = PHASE.prerequisite() {
        manifest::require_phase_complete(ctx.manifest_path(prerequisite), prerequisite)?;
    }
    let deployments = manifest::load_manifest(ctx.manifest_path(PHASE))?;
    plugin.restriction().check(&ctx.network)?;
    Ok(deployments)
}

/// Deploys `plugin` through `factory` and records it in the phase 2 manifest.
///
/// Nothing is written unless every step succeeds.
pub async fn deploy_collateral(
    ctx: &DeploymentContext,
    plugin: &impl CollateralPlugin,
    factory: &impl ContractFactory,
) -> Result<DeploymentReport, WorkflowError> {
    let mut deployments = preflight(ctx, plugin)?;
    let key = plugin.key();

    info!(@grey, "deploying {} to {}", plugin.description(), ctx.network);
    let deployed = plugin.deploy(factory, &ctx.config).await?;
    let collateral = deployed.collateral;

    expect_sound(factory, key, collateral, HealthCheck::AfterDeploy).await?;
    factory.refresh(collateral).await?;
    expect_sound(factory, key, collateral, HealthCheck::AfterRefresh).await?;

    info!(@grey, "deployed {} to {}: {collateral}", plugin.description(), ctx.network);

    let replaced = deployments.record(ManifestCategory::Collateral, key, collateral.to_string());
    if let Some(previous) = &replaced {
        debug!(@grey, "replacing {key} collateral {previous}");
    }
    for (erc20_key, address) in &deployed.erc20s {
        deployments.record(ManifestCategory::Erc20s, erc20_key.as_str(), address.to_string());
    }

    let manifest_path = ctx.manifest_path(PHASE);
    manifest::persist(&deployments, &manifest_path)?;

    Ok(DeploymentReport {
        network: ctx.network.clone(),
        key: key.to_string(),
        collateral,
        erc20s: deployed.erc20s,
        replaced,
        manifest_path,
    })
}

async fn expect_sound(
    factory: &impl ContractFactory,
    key: &str,
    address: Address,
    stage: HealthCheck,
) -> Result<(), WorkflowError> {
    let status = factory.status(address).await?;
    debug!(@grey, "{key} status {stage}: {status}");
    if status != CollateralStatus::Sound {
        return Err(WorkflowError::Unhealthy {
            key: key.to_string(),
            address,
            status,
            stage,
        });
    }
    Ok(())
}

/// Reports the state of the manifests a phase 2 deployment on `ctx`'s network reads.
///
/// Fails only if the phase 2 manifest exists but cannot be read.
pub fn check_phases(ctx: &DeploymentContext) -> Result<PhaseReport, WorkflowError> {
    let prerequisite_path = ctx.manifest_path(Phase::Core);
    let manifest_path = ctx.manifest_path(PHASE);
    Ok(PhaseReport {
        prerequisite_present: prerequisite_path.exists(),
        manifest_present: manifest_path.exists(),
        manifest: manifest::load_manifest(&manifest_path)?,
        prerequisite_path,
        manifest_path,
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, fs, path::Path};

    use super::*;
    use crate::core::{
        factory::TokenMetadata,
        network::NetworkClass,
        plugins::{AaveV3PyUsd, AerodromeMogWeth, Plugin},
    };

    /// Hands out sequential addresses and replays scripted statuses.
    #[derive(Default)]
    struct MockFactory {
        calls: RefCell<Vec<String>>,
        statuses: RefCell<VecDeque<CollateralStatus>>,
        next: RefCell<u8>,
    }

    impl MockFactory {
        fn with_statuses(statuses: &[CollateralStatus]) -> Self {
            Self {
                statuses: RefCell::new(statuses.iter().copied().collect()),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ContractFactory for MockFactory {
        async fn deploy(
            &self,
            contract: &str,
            _constructor_args: Vec<u8>,
        ) -> Result<Address, FactoryError> {
            self.calls.borrow_mut().push(format!("deploy {contract}"));
            let mut next = self.next.borrow_mut();
            *next += 1;
            Ok(Address::with_last_byte(*next))
        }

        async fn refresh(&self, collateral: Address) -> Result<(), FactoryError> {
            self.calls.borrow_mut().push(format!("refresh {collateral}"));
            Ok(())
        }

        async fn status(&self, collateral: Address) -> Result<CollateralStatus, FactoryError> {
            self.calls.borrow_mut().push(format!("status {collateral}"));
            Ok(self
                .statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or(CollateralStatus::Sound))
        }

        async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, FactoryError> {
            self.calls.borrow_mut().push(format!("metadata {token}"));
            Ok(TokenMetadata {
                name: "VolatileV2 AMM - MOG/WETH".to_string(),
                symbol: "vAMMV2-MOG/WETH".to_string(),
            })
        }
    }

    fn context(dir: &Path, chain_id: u64) -> DeploymentContext {
        DeploymentContext::from_registry(
            &NetworkRegistry::builtin(),
            Network::from_chain_id(chain_id),
            dir,
        )
        .unwrap()
    }

    fn with_core(dir: &Path, chain_id: u64) -> DeploymentContext {
        let ctx = context(dir, chain_id);
        fs::write(ctx.manifest_path(Phase::Core), "{}").unwrap();
        ctx
    }

    #[tokio::test]
    async fn records_a_healthy_collateral() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);
        let factory = MockFactory::default();

        let report = deploy_collateral(&ctx, &AaveV3PyUsd, &factory).await.unwrap();

        let collateral = Address::with_last_byte(1);
        assert_eq!(report.collateral, collateral);
        assert_eq!(report.key, "saEthPyUSD");
        assert_eq!(report.replaced, None);
        assert_eq!(report.new_deployments(), vec![collateral]);
        assert_eq!(
            factory.calls(),
            vec![
                "deploy AaveV3FiatCollateral".to_string(),
                format!("status {collateral}"),
                format!("refresh {collateral}"),
                format!("status {collateral}"),
            ]
        );

        let written = manifest::load_manifest(&report.manifest_path).unwrap();
        assert_eq!(
            written.get(ManifestCategory::Collateral, "saEthPyUSD"),
            Some(collateral.to_string().as_str())
        );
        assert!(written.erc20s.is_empty());
    }

    #[tokio::test]
    async fn records_the_wrapper_as_an_erc20() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 8453);
        let factory = MockFactory::default();

        let report = deploy_collateral(&ctx, &Plugin::AerodromeMogWeth, &factory)
            .await
            .unwrap();

        let wrapper = Address::with_last_byte(1);
        let collateral = Address::with_last_byte(2);
        assert_eq!(report.erc20s, vec![("aeroMOGWETH".to_string(), wrapper)]);
        assert_eq!(report.new_deployments(), vec![collateral, wrapper]);

        let written = manifest::load_manifest(ctx.manifest_path(PHASE)).unwrap();
        assert_eq!(
            written.get(ManifestCategory::Collateral, "aeroMOGWETH"),
            Some(collateral.to_string().as_str())
        );
        assert_eq!(
            written.get(ManifestCategory::Erc20s, "aeroMOGWETH"),
            Some(wrapper.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn existing_entries_survive_a_deployment() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 8453);
        let path = ctx.manifest_path(PHASE);
        let usdc = "0x093cb4f405924a0c468b43209d5e466f1dd0ac7d";
        let wusdc = "0xe176A5ebFB873D5b3cf1909d0EdaE4FE095F5bc7";
        fs::write(
            &path,
            format!(r#"{{"collateral": {{"aeroUSDCeUSD": "{usdc}"}}, "erc20s": {{"aeroUSDCeUSD": "{wusdc}"}}}}"#),
        )
        .unwrap();

        let report = deploy_collateral(&ctx, &AerodromeMogWeth, &MockFactory::default())
            .await
            .unwrap();
        assert_eq!(report.replaced, None);

        let written = manifest::load_manifest(&path).unwrap();
        assert_eq!(written.collateral.len(), 2);
        assert_eq!(written.erc20s.len(), 2);
        assert_eq!(
            written.get(ManifestCategory::Collateral, "aeroUSDCeUSD"),
            Some(usdc)
        );
        assert_eq!(written.get(ManifestCategory::Erc20s, "aeroUSDCeUSD"), Some(wusdc));
        assert_eq!(
            written.get(ManifestCategory::Collateral, "aeroMOGWETH"),
            Some(report.collateral.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn unhealthy_collateral_leaves_the_manifest_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);
        let path = ctx.manifest_path(PHASE);
        let before = "{\n  \"collateral\": {\n    \"saEthUSDC\": \"0x093cb4f405924a0c468b43209d5e466f1dd0ac7d\"\n  },\n  \"erc20s\": {}\n}";
        fs::write(&path, before).unwrap();

        for statuses in [
            &[CollateralStatus::Iffy][..],
            &[CollateralStatus::Sound, CollateralStatus::Disabled][..],
        ] {
            let factory = MockFactory::with_statuses(statuses);
            let err = deploy_collateral(&ctx, &AaveV3PyUsd, &factory)
                .await
                .unwrap_err();
            assert!(matches!(err, WorkflowError::Unhealthy { .. }), "{err}");
            assert_eq!(fs::read_to_string(&path).unwrap(), before);
        }
    }

    #[tokio::test]
    async fn unhealthy_first_deployment_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);
        let factory = MockFactory::with_statuses(&[CollateralStatus::Disabled]);

        let err = deploy_collateral(&ctx, &AaveV3PyUsd, &factory)
            .await
            .unwrap_err();
        match err {
            WorkflowError::Unhealthy { status, stage, .. } => {
                assert_eq!(status, CollateralStatus::Disabled);
                assert_eq!(stage, HealthCheck::AfterDeploy);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!ctx.manifest_path(PHASE).exists());
    }

    #[tokio::test]
    async fn wrong_network_makes_no_factory_calls() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);
        let factory = MockFactory::default();

        let err = deploy_collateral(&ctx, &AerodromeMogWeth, &factory)
            .await
            .unwrap_err();
        match err {
            WorkflowError::Network(NetworkError::Unsupported { required, .. }) => {
                assert_eq!(required, NetworkClass::BaseL2)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(factory.calls().is_empty());
        assert!(!ctx.manifest_path(PHASE).exists());
    }

    #[tokio::test]
    async fn missing_core_deployment_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), 1);
        let factory = MockFactory::default();

        let err = deploy_collateral(&ctx, &AaveV3PyUsd, &factory)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Manifest(ManifestError::MissingPrerequisite {
                phase: Phase::Core,
                ..
            })
        ));
        assert!(err
            .to_string()
            .ends_with("1-tmp-deployments.json doesn't exist yet. Run phase 1 (core system)"));
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn corrupt_manifest_stops_before_deploying() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);
        fs::write(ctx.manifest_path(PHASE), "{\"collateral\": ").unwrap();
        let factory = MockFactory::default();

        let err = deploy_collateral(&ctx, &AaveV3PyUsd, &factory)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Manifest(ManifestError::Corrupt { .. })
        ));
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn redeploying_replaces_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = with_core(dir.path(), 1);

        let first = deploy_collateral(&ctx, &AaveV3PyUsd, &MockFactory::default())
            .await
            .unwrap();
        let factory = MockFactory::default();
        *factory.next.borrow_mut() = 9;
        let second = deploy_collateral(&ctx, &AaveV3PyUsd, &factory).await.unwrap();

        assert_eq!(second.replaced, Some(first.collateral.to_string()));
        let written = manifest::load_manifest(ctx.manifest_path(PHASE)).unwrap();
        assert_eq!(written.collateral.len(), 1);
        assert_eq!(
            written.get(ManifestCategory::Collateral, "saEthPyUSD"),
            Some(Address::with_last_byte(10).to_string().as_str())
        );
    }

    #[test]
    fn phase_report() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), 8453);

        let report = check_phases(&ctx).unwrap();
        assert!(!report.prerequisite_present);
        assert!(!report.manifest_present);
        assert!(report.manifest.is_empty());

        fs::write(ctx.manifest_path(Phase::Core), "{}").unwrap();
        let report = check_phases(&ctx).unwrap();
        assert!(report.prerequisite_present);
        assert_eq!(
            report.prerequisite_path,
            dir.path().join("8453-tmp-deployments.json")
        );
    }

    #[test]
    fn unknown_chain_has_no_config() {
        let err = DeploymentContext::from_registry(
            &NetworkRegistry::builtin(),
            Network::from_chain_id(10),
            ".",
        )
        .unwrap_err();
        assert!(matches!(err, NetworkError::MissingConfig { chain_id: 10 }));
    }
}
