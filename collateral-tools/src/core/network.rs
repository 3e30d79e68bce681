// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Networks and their token and price feed configuration.

use std::{collections::BTreeMap, fmt, fs, path::Path};

use alloy::primitives::{address, Address};
use serde::Deserialize;

use crate::utils::color::Color;

/// Network names that belong to the Base L2 family.
const BASE_L2_CHAINS: &[&str] = &["base-goerli", "base", "base-sepolia"];

/// Chains that can be named from their chain id alone.
const KNOWN_CHAINS: &[(u64, &str)] = &[
    (1, "mainnet"),
    (31337, "hardhat"),
    (8453, "base"),
    (84531, "base-goerli"),
    (84532, "base-sepolia"),
];

/// Broad family a network belongs to. Some collateral only exists on one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    /// Ethereum mainnet and anything forking it, including local development chains.
    Mainnet,
    /// Base and its testnets.
    BaseL2,
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "Mainnet"),
            Self::BaseL2 => write!(f, "Base L2"),
        }
    }
}

/// The network a deployment targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub chain_id: u64,
}

impl Network {
    pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            chain_id,
        }
    }

    /// Names a network from its chain id, falling back to `unknown` for unlisted chains.
    pub fn from_chain_id(chain_id: u64) -> Self {
        let name = KNOWN_CHAINS
            .iter()
            .find_map(|(id, name)| (*id == chain_id).then_some(*name))
            .unwrap_or("unknown");
        Self::new(name, chain_id)
    }

    pub fn is_known(chain_id: u64) -> bool {
        KNOWN_CHAINS.iter().any(|(id, _)| *id == chain_id)
    }

    pub fn class(&self) -> NetworkClass {
        if BASE_L2_CHAINS.contains(&self.name.as_str()) {
            NetworkClass::BaseL2
        } else {
            NetworkClass::Mainnet
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.chain_id)
    }
}

/// Which networks a deployment may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkRestriction {
    Any,
    Only(NetworkClass),
}

impl NetworkRestriction {
    pub fn allows(&self, network: &Network) -> bool {
        match self {
            Self::Any => true,
            Self::Only(class) => network.class() == *class,
        }
    }

    pub fn check(&self, network: &Network) -> Result<(), NetworkError> {
        match self {
            Self::Only(class) if !self.allows(network) => Err(NetworkError::Unsupported {
                network: network.to_string(),
                required: *class,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for NetworkRestriction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any network"),
            Self::Only(class) => write!(f, "{class} only"),
        }
    }
}

/// Known token and Chainlink feed addresses for a network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    #[serde(default)]
    pub tokens: BTreeMap<String, Address>,
    #[serde(default)]
    pub chainlink_feeds: BTreeMap<String, Address>,
}

impl NetworkConfig {
    pub fn token(&self, symbol: &str) -> Result<Address, NetworkError> {
        self.tokens
            .get(symbol)
            .copied()
            .ok_or_else(|| NetworkError::MissingToken {
                network: self.name.clone(),
                symbol: symbol.to_string(),
            })
    }

    pub fn feed(&self, symbol: &str) -> Result<Address, NetworkError> {
        self.chainlink_feeds
            .get(symbol)
            .copied()
            .ok_or_else(|| NetworkError::MissingFeed {
                network: self.name.clone(),
                symbol: symbol.to_string(),
            })
    }

    fn merge(&mut self, patch: NetworkConfigPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.tokens.extend(patch.tokens);
        self.chainlink_feeds.extend(patch.chainlink_feeds);
    }
}

/// Network configuration for every chain deployments may target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRegistry {
    chains: BTreeMap<u64, NetworkConfig>,
}

impl NetworkRegistry {
    /// The registry with no operator overrides.
    pub fn builtin() -> Self {
        let mainnet = mainnet_config();
        let mut hardhat = mainnet.clone();
        hardhat.name = "hardhat".to_string();

        let chains = [(1, mainnet), (31337, hardhat), (8453, base_config())]
            .into_iter()
            .collect();
        Self { chains }
    }

    /// Builds the registry, applying the overrides file at `path` if one is given.
    pub fn load(overrides: Option<&Path>) -> Result<Self, NetworkError> {
        let mut registry = Self::builtin();
        if let Some(path) = overrides {
            let contents = fs::read_to_string(path).map_err(|source| NetworkError::Overrides {
                path: path.display().to_string(),
                message: source.to_string(),
            })?;
            registry
                .apply_overrides(&contents)
                .map_err(|err| match err {
                    NetworkError::Overrides { message, .. } => NetworkError::Overrides {
                        path: path.display().to_string(),
                        message,
                    },
                    other => other,
                })?;
            debug!(@grey, "applied network overrides from {}", path.display());
        }
        Ok(registry)
    }

    /// Merges a TOML overrides document into the registry.
    ///
    /// ```toml
    /// [chains.8453]
    /// name = "base"
    /// tokens = { AERO = "0x940181a94A35A4569E4529A3CDfB74e38FD98631" }
    /// chainlink_feeds = { ETH = "0x71041dddad3595F9CEd3DcCFBe3D1F4b0a16Bb70" }
    /// ```
    ///
    /// Entries are added to, or replace, the existing ones; chains not yet known are created.
    pub fn apply_overrides(&mut self, contents: &str) -> Result<(), NetworkError> {
        let overrides: NetworkOverrides =
            toml::from_str(contents).map_err(|err| NetworkError::Overrides {
                path: "<inline>".to_string(),
                message: err.to_string(),
            })?;
        for (chain_id, patch) in overrides.chains {
            let chain_id: u64 = chain_id.parse().map_err(|_| NetworkError::Overrides {
                path: "<inline>".to_string(),
                message: format!("chain id {chain_id:?} is not a number"),
            })?;
            let config = self.chains.entry(chain_id).or_insert_with(|| NetworkConfig {
                name: Network::from_chain_id(chain_id).name,
                ..Default::default()
            });
            config.merge(patch);
        }
        Ok(())
    }

    pub fn get(&self, chain_id: u64) -> Result<&NetworkConfig, NetworkError> {
        self.chains
            .get(&chain_id)
            .ok_or(NetworkError::MissingConfig { chain_id })
    }
}

#[derive(Debug, Default, Deserialize)]
struct NetworkOverrides {
    #[serde(default)]
    chains: BTreeMap<String, NetworkConfigPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct NetworkConfigPatch {
    name: Option<String>,
    #[serde(default)]
    tokens: BTreeMap<String, Address>,
    #[serde(default)]
    chainlink_feeds: BTreeMap<String, Address>,
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("missing network configuration for chain {chain_id}")]
    MissingConfig { chain_id: u64 },
    #[error("invalid network {} - only available on {required}", .network.red())]
    Unsupported {
        network: String,
        required: NetworkClass,
    },
    #[error("no {symbol} token configured for {network}")]
    MissingToken { network: String, symbol: String },
    #[error("no {symbol} chainlink feed configured for {network}")]
    MissingFeed { network: String, symbol: String },
    #[error("invalid network overrides in {path}: {message}")]
    Overrides { path: String, message: String },
}

fn mainnet_config() -> NetworkConfig {
    let tokens = [
        ("USDC", address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
        ("USDT", address!("0xdAC17F958D2ee523a2206206994597C13D831ec7")),
        ("USDP", address!("0x8E870D67F660D95d5be530380D0eC0bd388289E1")),
        ("BUSD", address!("0x4Fabb145d64652a948d72533023f6E7A623C7C53")),
        ("FRAX", address!("0x853d955aCEf822Db058eb8505911ED77F175b99e")),
        ("DAI", address!("0x6B175474E89094C44Da98b954EedeAC495271d0F")),
        ("eUSD", address!("0xA0d69E286B938e21CBf7E51D71F6A4c8918f482F")),
        ("pyUSD", address!("0x6c3ea9036406852006290770BEdFcAbA0e23A0e8")),
        ("aEthUSDC", address!("0x98C23E9d8f34FEFb1B7BD6a91B7FF122F4e16F5c")),
        ("saEthUSDC", address!("0x093cb4f405924a0c468b43209d5e466f1dd0ac7d")),
        ("aEthPyUSD", address!("0x0C0d01AbF3e6aDfcA0989eBbA9d6e85dD58EaB1E")),
        ("saEthPyUSD", address!("0xe176A5ebFB873D5b3cf1909d0EdaE4FE095F5bc7")),
        ("cDAI", address!("0x5d3a536E4D6DbD6114cc1Ead35777bAB948E3643")),
        ("cUSDC", address!("0x39AA39c021dfbaE8faC545936693aC917d5E7563")),
        ("cUSDT", address!("0xf650C3d88D12dB855b8bf7D11Be6C55A4e07dCC9")),
        ("cETH", address!("0x4Ddc2D193948926D02f9B1fE9e1daa0718270ED5")),
        ("cUSDCv3", address!("0xc3d688B66703497DAA19211EEdff47f25384cdc3")),
        ("AAVE", address!("0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9")),
        ("stkAAVE", address!("0x4da27a545c0c5B758a6BA100e3a049001de870f5")),
        ("COMP", address!("0xc00e94Cb662C3520282E6f5717214004A7f26888")),
        ("WETH", address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
        ("WBTC", address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599")),
        ("RSR", address!("0x320623b8E4fF03373931769A31Fc52A4E78B5d70")),
        ("CRV", address!("0xD533a949740bb3306d119CC777fa900bA034cd52")),
        ("CVX", address!("0x4e3FBD56CD56c3e72c1403e103b45Db9da5B9D2B")),
        ("frxETH", address!("0x5E8422345238F34275888049021821E8E08CAa1f")),
        ("sfrxETH", address!("0xac3E018457B222d93114458476f3E3416Abbe38F")),
        ("stETH", address!("0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84")),
        ("wstETH", address!("0x7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0")),
        ("rETH", address!("0xae78736Cd615f374D3085123A210448E74Fc6393")),
    ];
    let chainlink_feeds = [
        ("ETH", address!("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419")),
        ("USDC", address!("0x8fFfFfd4AfB6115b954Bd326cbe7B4BA576818f6")),
        ("USDT", address!("0x3E7d1eAB13ad0104d2750B8863b489D65364e32D")),
        ("DAI", address!("0xAed0c38402a5d19df6E4c03F4E2DceD6e29c1ee9")),
        ("pyUSD", address!("0x8f1dF6D7F2db73eECE86a18b4381F4707b918FB1")),
        ("RSR", address!("0x759bBC1be8F90eE6457C44abc7d443842a976d02")),
    ];
    config("mainnet", &tokens, &chainlink_feeds)
}

fn base_config() -> NetworkConfig {
    let tokens = [
        ("WETH", address!("0x4200000000000000000000000000000000000006")),
        ("USDC", address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")),
        ("eUSD", address!("0xCfA3Ef56d303AE4fAabA0592388F19d7C3399FB4")),
        ("AERO", address!("0x940181a94A35A4569E4529A3CDfB74e38FD98631")),
        ("MOG", address!("0x2Da56AcB9Ea78330f947bD57C54119Debda7AF71")),
        ("RSR", address!("0xaB36452DbAC151bE02b16Ca17d8919826072f64a")),
        ("wstETH", address!("0xc1CBa3fCea344f92D9239c08C0568f6F2F0ee452")),
    ];
    let chainlink_feeds = [
        ("ETH", address!("0x71041dddad3595F9CEd3DcCFBe3D1F4b0a16Bb70")),
        ("USDC", address!("0x7e860098F58bBFC8648a4311b374B1D669a2bc6B")),
        ("eUSD", address!("0x9b2C948dbA5952A1f5Ab6fA16101c1392b8da1ab")),
        ("MOG", address!("0x4aeb6D15769EaD32D0c5Be2940F40c7CFf53801d")),
        ("RSR", address!("0xAa98aE504658766Dfe11F31c5D95a0bdcABDe0b1")),
    ];
    config("base", &tokens, &chainlink_feeds)
}

fn config(name: &str, tokens: &[(&str, Address)], feeds: &[(&str, Address)]) -> NetworkConfig {
    let collect = |entries: &[(&str, Address)]| {
        entries
            .iter()
            .map(|(symbol, address)| (symbol.to_string(), *address))
            .collect()
    };
    NetworkConfig {
        name: name.to_string(),
        tokens: collect(tokens),
        chainlink_feeds: collect(feeds),
    }
}
