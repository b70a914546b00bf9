//! Network profile resolution for the deploy scripts
//!
//! Profiles are resolved once at process start into an explicit
//! configuration struct; nothing in the deploy path reads the environment
//! directly.

use std::{
    env,
    fmt::{self, Display},
};

use clap::ValueEnum;

use crate::{
    constants::{
        APOTHEM_PRIV_KEY_ENV_VAR, APOTHEM_URL_ENV_VAR, DEFAULT_DEVNET_HOSTPORT,
        DEFAULT_DEVNET_PKEY, DEVNET_CHAIN_ID, SEPOLIA_PRIV_KEY_ENV_VAR, SEPOLIA_URL_ENV_VAR,
    },
    errors::ScriptError,
};

/// The named network profiles a deployment can target
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// The Sepolia Ethereum testnet
    Sepolia,
    /// The XDC Apothem testnet
    Apothem,
    /// A local development network
    Devnet,
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Sepolia => write!(f, "sepolia"),
            Network::Apothem => write!(f, "apothem"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

/// A resolved network profile: the RPC endpoint, the signing credentials,
/// and the chain id the network is expected to report, if pinned
#[derive(Clone, Debug)]
pub struct NetworkProfile {
    /// The network this profile targets
    pub network: Network,
    /// The RPC endpoint URL
    pub rpc_url: String,
    /// The private keys of the signing accounts, in priority order
    pub accounts: Vec<String>,
    /// The chain id the network is expected to report, if pinned
    pub chain_id: Option<u64>,
}

impl NetworkProfile {
    /// Resolves the profile for the given network from the environment,
    /// applying the CLI overrides where given.
    ///
    /// A missing environment variable for the selected network fails
    /// resolution; no transaction can be broadcast past this point.
    pub fn resolve(
        network: Network,
        rpc_url_override: Option<String>,
        priv_key_override: Option<String>,
    ) -> Result<Self, ScriptError> {
        let rpc_url = match rpc_url_override {
            Some(url) => url,
            None => match network {
                Network::Sepolia => require_env(SEPOLIA_URL_ENV_VAR)?,
                Network::Apothem => require_env(APOTHEM_URL_ENV_VAR)?,
                Network::Devnet => DEFAULT_DEVNET_HOSTPORT.to_string(),
            },
        };

        let accounts = match priv_key_override {
            Some(key) => vec![key],
            None => match network {
                Network::Sepolia => vec![require_env(SEPOLIA_PRIV_KEY_ENV_VAR)?],
                Network::Apothem => vec![require_env(APOTHEM_PRIV_KEY_ENV_VAR)?],
                Network::Devnet => vec![DEFAULT_DEVNET_PKEY.to_string()],
            },
        };

        let chain_id = match network {
            Network::Devnet => Some(DEVNET_CHAIN_ID),
            _ => None,
        };

        Ok(Self {
            network,
            rpc_url,
            accounts,
            chain_id,
        })
    }

    /// The private key used to sign deployment transactions
    pub fn deployer_key(&self) -> &str {
        // `resolve` guarantees at least one account per profile
        &self.accounts[0]
    }
}

/// Process-wide deployment configuration, constructed once at startup
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// The resolved network profile
    pub profile: NetworkProfile,
    /// The directory containing the contract build artifacts
    pub artifacts_dir: String,
    /// The path of the file at which deployed addresses are recorded
    pub deployments_path: String,
}

/// Reads a required environment variable
fn require_env(var: &str) -> Result<String, ScriptError> {
    env::var(var).map_err(|_| ScriptError::ConfigResolution(format!("{} is not set", var)))
}
