// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Collateral plugins that can be deployed.
//!
//! Each plugin knows its manifest key, which networks it exists on and how to build its
//! constructor arguments from a [`NetworkConfig`]. Creating the contracts is left to a
//! [`ContractFactory`].

use std::fmt;

use alloy::primitives::{aliases::U48, Address};

use super::{
    factory::{ContractFactory, FactoryError},
    network::{NetworkConfig, NetworkError, NetworkRestriction},
    numbers::Bytes32StringError,
};

pub mod aave_v3;
pub mod abi;
pub mod aerodrome;

pub use aave_v3::AaveV3PyUsd;
pub use aerodrome::AerodromeMogWeth;

/// Seconds to keep serving a last known price once oracles stop responding (1 week).
pub const PRICE_TIMEOUT: U48 = U48::from_limbs([604_800]);

/// Seconds a collateral may stay IFFY before it defaults (24h).
pub const DELAY_UNTIL_DEFAULT: U48 = U48::from_limbs([86_400]);

/// Contracts produced by deploying one collateral plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedCollateral {
    pub collateral: Address,
    /// Wrapper tokens created before the collateral, keyed for the `erc20s` manifest map.
    pub erc20s: Vec<(String, Address)>,
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Factory(#[from] FactoryError),
    #[error("{0}")]
    TargetName(#[from] Bytes32StringError),
}

/// A deployable collateral plugin.
#[allow(async_fn_in_trait)]
pub trait CollateralPlugin {
    /// Key under which the collateral is recorded in the manifest.
    fn key(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn restriction(&self) -> NetworkRestriction;

    /// Creates the collateral, and anything it needs, through `factory`.
    async fn deploy(
        &self,
        factory: &impl ContractFactory,
        config: &NetworkConfig,
    ) -> Result<DeployedCollateral, PluginError>;
}

/// Every shipped plugin, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Plugin {
    /// Aave V3 static aToken for pyUSD on mainnet
    AaveV3Pyusd,
    /// Aerodrome volatile MOG-WETH pool on Base
    AerodromeMogWeth,
}

impl Plugin {
    pub const ALL: &'static [Plugin] = &[Self::AaveV3Pyusd, Self::AerodromeMogWeth];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AaveV3Pyusd => "aave-v3-pyusd",
            Self::AerodromeMogWeth => "aerodrome-mog-weth",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CollateralPlugin for Plugin {
    fn key(&self) -> &'static str {
        match self {
            Self::AaveV3Pyusd => AaveV3PyUsd.key(),
            Self::AerodromeMogWeth => AerodromeMogWeth.key(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::AaveV3Pyusd => AaveV3PyUsd.description(),
            Self::AerodromeMogWeth => AerodromeMogWeth.description(),
        }
    }

    fn restriction(&self) -> NetworkRestriction {
        match self {
            Self::AaveV3Pyusd => AaveV3PyUsd.restriction(),
            Self::AerodromeMogWeth => AerodromeMogWeth.restriction(),
        }
    }

    async fn deploy(
        &self,
        factory: &impl ContractFactory,
        config: &NetworkConfig,
    ) -> Result<DeployedCollateral, PluginError> {
        match self {
            Self::AaveV3Pyusd => AaveV3PyUsd.deploy(factory, config).await,
            Self::AerodromeMogWeth => AerodromeMogWeth.deploy(factory, config).await,
        }
    }
}
