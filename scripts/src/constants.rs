//! Constants used in the deploy scripts

/// The name of the marketplace contract deployed by default
pub const MARKETPLACE_CONTRACT_NAME: &str = "NFTMarketplace";

/// The solc version the marketplace contracts are compiled with.
///
/// The Solidity build producing the artifact registry is pinned to this
/// version; the scripts themselves never invoke the compiler.
pub const SOLC_VERSION: &str = "0.8.20";

/// The default directory holding the contract build artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The file extension of contract build artifacts
pub const ARTIFACT_EXTENSION: &str = "json";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The top-level key under which deployed addresses are recorded in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The default number of seconds to wait for deployment confirmation before giving up
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

/// The environment variable holding the Sepolia RPC URL
pub const SEPOLIA_URL_ENV_VAR: &str = "SEPOLIA_URL";

/// The environment variable holding the Sepolia deployer private key
pub const SEPOLIA_PRIV_KEY_ENV_VAR: &str = "SEPOLIA_PRIVATE_KEY";

/// The environment variable holding the Apothem RPC URL
pub const APOTHEM_URL_ENV_VAR: &str = "APOTHEM_URL";

/// The environment variable holding the Apothem deployer private key
pub const APOTHEM_PRIV_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The chain ID of the local devnet
pub const DEVNET_CHAIN_ID: u64 = 1337;

/// The default RPC URL of the local devnet
pub const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The default funded devnet account private key (dev node account #0)
pub const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
