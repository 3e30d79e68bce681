// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation.
//!
//! [`ContractFactory`] is everything the deployment workflow needs from a chain: create a
//! contract, poke a collateral plugin into recomputing its status and read that status back.
//! [`ChainFactory`] implements it against a live node using compiled artifacts on disk.

use std::{fmt, fs, path::PathBuf};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
    sol,
};
use serde::Deserialize;

use crate::utils::{color::DebugColor, decode0x};

sol! {
    #[sol(rpc)]
    interface ICollateral {
        function refresh() external;
        function status() external view returns (uint8);
    }

    #[sol(rpc)]
    interface IERC20Metadata {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
    }
}

/// Health of a collateral plugin as reported by its `status()` accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollateralStatus {
    Sound,
    /// Possibly defaulting; will become disabled if the condition persists.
    Iffy,
    Disabled,
}

impl TryFrom<u8> for CollateralStatus {
    type Error = FactoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sound),
            1 => Ok(Self::Iffy),
            2 => Ok(Self::Disabled),
            other => Err(FactoryError::UnknownStatus(other)),
        }
    }
}

impl fmt::Display for CollateralStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sound => write!(f, "SOUND"),
            Self::Iffy => write!(f, "IFFY"),
            Self::Disabled => write!(f, "DISABLED"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
}

/// Creates contracts and inspects collateral plugins on a chain.
#[allow(async_fn_in_trait)]
pub trait ContractFactory {
    /// Creates `contract` with ABI-encoded `constructor_args`, waiting for it to be mined.
    async fn deploy(&self, contract: &str, constructor_args: Vec<u8>)
        -> Result<Address, FactoryError>;

    /// Calls `refresh()` on a collateral plugin, waiting for it to be mined.
    async fn refresh(&self, collateral: Address) -> Result<(), FactoryError>;

    async fn status(&self, collateral: Address) -> Result<CollateralStatus, FactoryError>;

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, FactoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error("no artifact named {name} under {}", .root.display())]
    ArtifactNotFound { name: String, root: PathBuf },
    #[error("invalid artifact {}: {message}", .path.display())]
    InvalidArtifact { path: PathBuf, message: String },
    #[error("{contract} deployment reverted in tx {}", .tx_hash.debug_red())]
    Reverted { contract: String, tx_hash: TxHash },
    #[error("missing contract address for {0} in receipt")]
    NoContractAddress(String),
    #[error("{0} is not a known collateral status")]
    UnknownStatus(u8),
}

/// Compiled contract artifacts (Hardhat or Foundry layout) under a root directory.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

#[derive(Deserialize)]
struct Artifact {
    bytecode: ArtifactBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    /// Hardhat: `"bytecode": "0x..."`
    Hex(String),
    /// Foundry: `"bytecode": { "object": "0x..." }`
    Object { object: String },
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds the artifact file for the contract `name`.
    pub fn find(&self, name: &str) -> Result<PathBuf, FactoryError> {
        let not_found = || FactoryError::ArtifactNotFound {
            name: name.to_string(),
            root: self.root.clone(),
        };
        let pattern = self.root.join("**").join(format!("{name}.json"));
        let pattern = pattern.to_str().ok_or_else(not_found)?;
        glob::glob(pattern)
            .map_err(|_| not_found())?
            .filter_map(Result::ok)
            .find(|path| path.is_file())
            .ok_or_else(not_found)
    }

    /// Creation bytecode of the contract `name`.
    pub fn bytecode(&self, name: &str) -> Result<Vec<u8>, FactoryError> {
        let path = self.find(name)?;
        let invalid = |message: String| FactoryError::InvalidArtifact {
            path: path.clone(),
            message,
        };
        let contents = fs::read(&path).map_err(|err| invalid(err.to_string()))?;
        let artifact: Artifact =
            serde_json::from_slice(&contents).map_err(|err| invalid(err.to_string()))?;
        let hex = match artifact.bytecode {
            ArtifactBytecode::Hex(hex) | ArtifactBytecode::Object { object: hex } => hex,
        };
        let code = decode0x(&hex).map_err(|err| invalid(err.to_string()))?;
        if code.is_empty() {
            return Err(invalid(
                "empty bytecode (abstract contract or interface?)".to_string(),
            ));
        }
        Ok(code)
    }
}

/// A [`ContractFactory`] sending transactions through an alloy provider.
pub struct ChainFactory<P> {
    provider: P,
    artifacts: ArtifactStore,
}

impl<P: Provider + WalletProvider> ChainFactory<P> {
    pub fn new(provider: P, artifacts: ArtifactStore) -> Self {
        Self {
            provider,
            artifacts,
        }
    }

    pub fn deployer(&self) -> Address {
        self.provider.default_signer_address()
    }
}

impl<P: Provider + WalletProvider> ContractFactory for ChainFactory<P> {
    async fn deploy(
        &self,
        contract: &str,
        constructor_args: Vec<u8>,
    ) -> Result<Address, FactoryError> {
        let mut code = self.artifacts.bytecode(contract)?;
        code.extend(constructor_args);

        let tx = TransactionRequest::default()
            .with_from(self.deployer())
            .with_deploy_code(code);
        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent {contract} deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(FactoryError::Reverted {
                contract: contract.to_string(),
                tx_hash,
            });
        }
        receipt
            .contract_address
            .ok_or_else(|| FactoryError::NoContractAddress(contract.to_string()))
    }

    async fn refresh(&self, collateral: Address) -> Result<(), FactoryError> {
        let receipt = ICollateral::new(collateral, &self.provider)
            .refresh()
            .from(self.deployer())
            .send()
            .await?
            .get_receipt()
            .await?;
        debug!(@grey, "refreshed {collateral} in tx {}", receipt.transaction_hash.debug_lavender());
        Ok(())
    }

    async fn status(&self, collateral: Address) -> Result<CollateralStatus, FactoryError> {
        let status = ICollateral::new(collateral, &self.provider)
            .status()
            .call()
            .await?;
        status.try_into()
    }

    async fn token_metadata(&self, token: Address) -> Result<TokenMetadata, FactoryError> {
        let erc20 = IERC20Metadata::new(token, &self.provider);
        let name = erc20.name().call().await?;
        let symbol = erc20.symbol().call().await?;
        Ok(TokenMetadata { name, symbol })
    }
}
