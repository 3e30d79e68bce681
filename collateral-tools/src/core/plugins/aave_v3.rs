// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Aave V3 fiat collateral backed by the static aToken for pyUSD.

use alloy::{
    primitives::aliases::{U192, U48},
    sol_types::SolConstructor,
};

use super::{
    abi::{AaveV3FiatCollateral, CollateralConfig},
    CollateralPlugin, DeployedCollateral, PluginError, DELAY_UNTIL_DEFAULT,
    PRICE_TIMEOUT,
};
use crate::core::{
    factory::ContractFactory,
    network::{NetworkClass, NetworkConfig, NetworkRestriction},
    numbers::{bytes32_string, fp_ratio, fp_whole},
};

pub const CONTRACT: &str = "AaveV3FiatCollateral";

pub const PYUSD_ORACLE_TIMEOUT: U48 = U48::from_limbs([86_400]);

pub fn pyusd_oracle_error() -> U192 {
    fp_ratio(3, 1000)
}

pub fn pyusd_max_trade_volume() -> U192 {
    fp_whole(1_000_000)
}

/// Share of appreciation hidden to absorb rounding in the wrapper's exchange rate (1e-6).
pub fn revenue_hiding() -> U192 {
    fp_ratio(1, 1_000_000)
}

/// Aave V3 pyUSD collateral. Only exists on mainnet.
#[derive(Clone, Copy, Debug, Default)]
pub struct AaveV3PyUsd;

impl AaveV3PyUsd {
    /// ABI-encoded constructor arguments for `config`'s network.
    pub fn constructor_args(&self, config: &NetworkConfig) -> Result<Vec<u8>, PluginError> {
        let oracle_error = pyusd_oracle_error();
        let collateral_config = CollateralConfig {
            priceTimeout: PRICE_TIMEOUT,
            chainlinkFeed: config.feed("pyUSD")?,
            oracleError: oracle_error,
            erc20: config.token("saEthPyUSD")?,
            maxTradeVolume: pyusd_max_trade_volume(),
            oracleTimeout: PYUSD_ORACLE_TIMEOUT,
            targetName: bytes32_string("USD")?,
            defaultThreshold: fp_ratio(1, 100) + oracle_error,
            delayUntilDefault: DELAY_UNTIL_DEFAULT,
        };
        Ok(AaveV3FiatCollateral::constructorCall {
            config: collateral_config,
            revenueHiding: revenue_hiding(),
        }
        .abi_encode())
    }
}

impl CollateralPlugin for AaveV3PyUsd {
    fn key(&self) -> &'static str {
        "saEthPyUSD"
    }

    fn description(&self) -> &'static str {
        "Aave V3 pyUSD"
    }

    fn restriction(&self) -> NetworkRestriction {
        NetworkRestriction::Only(NetworkClass::Mainnet)
    }

    async fn deploy(
        &self,
        factory: &impl ContractFactory,
        config: &NetworkConfig,
    ) -> Result<DeployedCollateral, PluginError> {
        let args = self.constructor_args(config)?;
        let collateral = factory.deploy(CONTRACT, args).await?;
        Ok(DeployedCollateral {
            collateral,
            erc20s: Vec::new(),
        })
    }
}
