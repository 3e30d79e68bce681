// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use collateral_tools::{
    core::{
        factory::ArtifactStore,
        network::{Network, NetworkRegistry},
        workflow::DeploymentContext,
    },
    utils::decode0x,
};
use eyre::{bail, eyre, Context};

use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_DIR, DEFAULT_ENDPOINT};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return private_key_wallet(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return private_key_wallet(&key, chain_id);
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(eyre!("no private key or keystore given"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

fn private_key_wallet(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let bytes = decode0x(key).wrap_err("private key is not valid hex")?;
    if bytes.len() != 32 {
        bail!("private key must be 32 bytes, got {}", bytes.len());
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the target network
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Chain id of the target network (defaults to asking the RPC endpoint)
    #[arg(long, env = "CHAIN_ID")]
    chain_id: Option<u64>,
    /// Network name, overriding the one known for the chain id
    #[arg(long)]
    network: Option<String>,
    /// TOML file overriding or extending the built-in network configuration
    #[arg(long, env = "NETWORK_CONFIG")]
    network_config: Option<PathBuf>,
    /// Directory holding the deployment manifests
    #[arg(long, env = "DEPLOYMENTS_DIR", default_value = DEFAULT_DEPLOYMENTS_DIR)]
    deployments_dir: PathBuf,
}

impl NetworkArgs {
    /// The chain id given on the command line, or else the one reported by `provider`'s endpoint.
    pub async fn chain_id(&self, provider: &ProviderArgs) -> eyre::Result<u64> {
        match self.chain_id {
            Some(chain_id) => Ok(chain_id),
            None => {
                let chain_id = provider.build_provider().await?.get_chain_id().await?;
                Ok(chain_id)
            }
        }
    }

    /// The deployment context for the connected chain `chain_id`.
    ///
    /// Fails if an explicit `--chain-id` disagrees with the endpoint.
    pub fn context(&self, chain_id: u64) -> eyre::Result<DeploymentContext> {
        if let Some(expected) = self.chain_id {
            if expected != chain_id {
                bail!("endpoint is on chain {chain_id}, not {expected}");
            }
        }
        let registry = NetworkRegistry::load(self.network_config.as_deref())?;
        let network = match (&self.network, registry.get(chain_id)) {
            (Some(name), _) => Network::new(name.clone(), chain_id),
            (None, Ok(config)) if !Network::is_known(chain_id) => {
                Network::new(config.name.clone(), chain_id)
            }
            _ => Network::from_chain_id(chain_id),
        };
        let ctx = DeploymentContext::from_registry(&registry, network, &self.deployments_dir)?;
        Ok(ctx)
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory of compiled contract artifacts (Hardhat or Foundry)
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    artifacts_dir: PathBuf,
}

impl ArtifactArgs {
    pub fn store(&self) -> eyre::Result<ArtifactStore> {
        if !self.artifacts_dir.is_dir() {
            bail!(
                "artifacts directory {} does not exist",
                self.artifacts_dir.display()
            );
        }
        Ok(ArtifactStore::new(&self.artifacts_dir))
    }
}
