// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Aerodrome volatile pool collateral for the MOG-WETH vAMM on Base.
//!
//! The pool's LP token is staked in its gauge through an `AerodromeGaugeWrapper`, which is
//! deployed first and becomes the collateral's `erc20`.

use alloy::{
    primitives::{
        address,
        aliases::{U192, U48},
        Address,
    },
    sol_types::SolConstructor,
};

use super::{
    abi::{
        AerodromeCollateralConfig, AerodromeGaugeWrapper, AerodromeVolatileCollateral,
        CollateralConfig,
    },
    CollateralPlugin, DeployedCollateral, PluginError, DELAY_UNTIL_DEFAULT,
    PRICE_TIMEOUT,
};
use crate::core::{
    factory::ContractFactory,
    network::{NetworkClass, NetworkConfig, NetworkRestriction},
    numbers::{bytes32_string, combined_error, fp_ratio, fp_whole},
};

pub const WRAPPER_CONTRACT: &str = "AerodromeGaugeWrapper";
pub const COLLATERAL_CONTRACT: &str = "AerodromeVolatileCollateral";

pub const AERO_MOG_WETH_POOL: Address = address!("0x4a311ac4563abc30e71d0631c88a6232c1309ac5");
pub const AERO_MOG_WETH_GAUGE: Address = address!("0x8FCc385d8d7f3A2e087853a79531630Bf96575e8");

/// Placeholder feed; the collateral prices through `feeds` but rejects a zero address.
pub const ONE_ADDRESS: Address = Address::with_last_byte(1);

/// `AerodromePoolType.Volatile`
pub const VOLATILE_POOL: u8 = 1;

pub const MOG_ORACLE_TIMEOUT: U48 = U48::from_limbs([86_400]);
pub const ETH_ORACLE_TIMEOUT: U48 = U48::from_limbs([1_200]);

pub fn mog_oracle_error() -> U192 {
    fp_ratio(5, 1000)
}

pub fn eth_oracle_error() -> U192 {
    fp_ratio(15, 10_000)
}

pub fn max_trade_volume() -> U192 {
    fp_whole(1_000_000)
}

/// MOG-WETH volatile pool collateral. Only exists on Base.
#[derive(Clone, Copy, Debug, Default)]
pub struct AerodromeMogWeth;

impl AerodromeMogWeth {
    /// Constructor arguments of the gauge wrapper, named after the pool's LP token.
    pub fn wrapper_args(
        &self,
        config: &NetworkConfig,
        pool_name: &str,
        pool_symbol: &str,
    ) -> Result<Vec<u8>, PluginError> {
        Ok(AerodromeGaugeWrapper::constructorCall {
            lpToken: AERO_MOG_WETH_POOL,
            name: format!("w{pool_name}"),
            symbol: format!("w{pool_symbol}"),
            aero: config.token("AERO")?,
            gauge: AERO_MOG_WETH_GAUGE,
        }
        .abi_encode())
    }

    /// Constructor arguments of the collateral wrapping `wrapper`.
    pub fn collateral_args(
        &self,
        config: &NetworkConfig,
        wrapper: Address,
    ) -> Result<Vec<u8>, PluginError> {
        let collateral_config = CollateralConfig {
            priceTimeout: PRICE_TIMEOUT,
            chainlinkFeed: ONE_ADDRESS,
            oracleError: combined_error(mog_oracle_error(), eth_oracle_error()),
            erc20: wrapper,
            maxTradeVolume: max_trade_volume(),
            // the larger of the two feed timeouts
            oracleTimeout: MOG_ORACLE_TIMEOUT,
            // tokens in lexicographical order
            targetName: bytes32_string("50%ETH50%MOG")?,
            defaultThreshold: U192::ZERO,
            delayUntilDefault: DELAY_UNTIL_DEFAULT,
        };
        let aero_config = AerodromeCollateralConfig {
            pool: AERO_MOG_WETH_POOL,
            poolType: VOLATILE_POOL,
            feeds: vec![vec![config.feed("ETH")?], vec![config.feed("MOG")?]],
            oracleTimeouts: vec![vec![ETH_ORACLE_TIMEOUT], vec![MOG_ORACLE_TIMEOUT]],
            oracleErrors: vec![vec![eth_oracle_error()], vec![mog_oracle_error()]],
        };
        Ok(AerodromeVolatileCollateral::constructorCall {
            config: collateral_config,
            aeroConfig: aero_config,
        }
        .abi_encode())
    }
}

impl CollateralPlugin for AerodromeMogWeth {
    fn key(&self) -> &'static str {
        "aeroMOGWETH"
    }

    fn description(&self) -> &'static str {
        "Aerodrome Volatile MOG-WETH"
    }

    fn restriction(&self) -> NetworkRestriction {
        NetworkRestriction::Only(NetworkClass::BaseL2)
    }

    async fn deploy(
        &self,
        factory: &impl ContractFactory,
        config: &NetworkConfig,
    ) -> Result<DeployedCollateral, PluginError> {
        let pool = factory.token_metadata(AERO_MOG_WETH_POOL).await?;
        let wrapper_args = self.wrapper_args(config, &pool.name, &pool.symbol)?;
        // Fail on a missing feed before anything is created.
        self.collateral_args(config, Address::ZERO)?;

        let wrapper = factory.deploy(WRAPPER_CONTRACT, wrapper_args).await?;
        info!(@grey, "deployed wrapper for {} on {}: {wrapper}", self.description(), config.name);

        let collateral = factory
            .deploy(COLLATERAL_CONTRACT, self.collateral_args(config, wrapper)?)
            .await?;
        Ok(DeployedCollateral {
            collateral,
            erc20s: vec![(self.key().to_string(), wrapper)],
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::U256,
        sol_types::{sol_data, SolType},
    };

    use super::*;
    use crate::core::network::NetworkRegistry;

    type WrapperArgs = (
        sol_data::Address,
        sol_data::String,
        sol_data::String,
        sol_data::Address,
        sol_data::Address,
    );

    fn base() -> NetworkConfig {
        NetworkRegistry::builtin().get(8453).unwrap().clone()
    }

    #[test]
    fn wrapper_is_named_after_the_pool() {
        let args = AerodromeMogWeth
            .wrapper_args(&base(), "VolatileV2 AMM - MOG/WETH", "vAMMV2-MOG/WETH")
            .unwrap();
        let (lp_token, name, symbol, aero, gauge) = WrapperArgs::abi_decode_params(&args).unwrap();
        assert_eq!(name, "wVolatileV2 AMM - MOG/WETH");
        assert_eq!(symbol, "wvAMMV2-MOG/WETH");
        assert_eq!(lp_token, AERO_MOG_WETH_POOL);
        assert_eq!(gauge, AERO_MOG_WETH_GAUGE);
        assert_eq!(aero, address!("0x940181a94A35A4569E4529A3CDfB74e38FD98631"));
    }

    #[test]
    fn collateral_config() {
        let wrapper = Address::with_last_byte(0xaa);
        let args = AerodromeMogWeth.collateral_args(&base(), wrapper).unwrap();
        let (config, aero) =
            <(CollateralConfig, AerodromeCollateralConfig)>::abi_decode_params(&args).unwrap();

        assert_eq!(config.erc20, wrapper);
        assert_eq!(config.chainlinkFeed, ONE_ADDRESS);
        assert_eq!(config.oracleError, fp_ratio(65_075, 10_000_000));
        assert_eq!(config.oracleTimeout, MOG_ORACLE_TIMEOUT);
        assert_eq!(config.defaultThreshold, U192::ZERO);
        assert_eq!(&config.targetName[..12], b"50%ETH50%MOG");

        assert_eq!(aero.poolType, VOLATILE_POOL);
        assert_eq!(
            aero.feeds,
            vec![
                vec![address!("0x71041dddad3595F9CEd3DcCFBe3D1F4b0a16Bb70")],
                vec![address!("0x4aeb6D15769EaD32D0c5Be2940F40c7CFf53801d")],
            ]
        );
        assert_eq!(aero.oracleTimeouts[0], vec![ETH_ORACLE_TIMEOUT]);
        assert_eq!(aero.oracleErrors[1], vec![mog_oracle_error()]);
    }

    #[test]
    fn price_timeout_leads_the_config() {
        let args = AerodromeMogWeth
            .collateral_args(&base(), Address::with_last_byte(1))
            .unwrap();
        assert_eq!(U256::from_be_slice(&args[..32]), U256::from(604_800));
    }
}
