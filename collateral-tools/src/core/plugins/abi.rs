// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor ABIs of the collateral contracts.

use alloy::sol;

sol! {
    /// Common constructor configuration of every collateral plugin.
    #[derive(Debug, PartialEq)]
    struct CollateralConfig {
        uint48 priceTimeout;
        address chainlinkFeed;
        uint192 oracleError;
        address erc20;
        uint192 maxTradeVolume;
        uint48 oracleTimeout;
        bytes32 targetName;
        uint192 defaultThreshold;
        uint48 delayUntilDefault;
    }

    #[derive(Debug, PartialEq)]
    struct AerodromeCollateralConfig {
        address pool;
        uint8 poolType;
        address[][] feeds;
        uint48[][] oracleTimeouts;
        uint192[][] oracleErrors;
    }

    contract AaveV3FiatCollateral {
        constructor(CollateralConfig memory config, uint192 revenueHiding);
    }

    contract AerodromeGaugeWrapper {
        constructor(address lpToken, string name, string symbol, address aero, address gauge);
    }

    contract AerodromeVolatileCollateral {
        constructor(CollateralConfig memory config, AerodromeCollateralConfig memory aeroConfig);
    }
}
