//! Definitions of CLI arguments and commands for deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::deploy,
    config::{DeployConfig, Network},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_DEPLOYMENTS_PATH,
        MARKETPLACE_CONTRACT_NAME, NUM_DEPLOY_CONFIRMATIONS,
    },
    errors::ScriptError,
};

/// The CLI arguments for the deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// The network profile to deploy against
    #[arg(short, long, value_enum, default_value_t = Network::Devnet)]
    pub network: Network,

    /// Overrides the profile's RPC URL
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Overrides the profile's deployer private key
    // TODO: Better key management
    #[arg(short, long)]
    pub priv_key: Option<String>,

    /// The directory containing the contract build artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// The path of the file at which to record deployed addresses
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy script commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract from the build-artifact registry
    Deploy(DeployArgs),
}

/// Deploy a contract from the build-artifact registry.
///
/// The deployment transaction is signed with the profile's deployer key;
/// the resulting address is printed and recorded in the deployments file.
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract to deploy, as known to the artifact registry
    #[arg(short, long, default_value = MARKETPLACE_CONTRACT_NAME)]
    pub contract: String,

    /// A constructor argument, in ABI order; repeat the flag for each argument
    #[arg(long = "ctor-arg")]
    pub ctor_args: Vec<String>,

    /// The number of confirmations to wait for on the deployment transaction
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: usize,

    /// Seconds to wait for deployment confirmation before giving up
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Command {
    /// Runs the command against the given client
    pub async fn run(
        self,
        config: &DeployConfig,
        client: Arc<impl Middleware>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, config, client).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::config::Network;

    use super::{Cli, Command};

    #[test]
    fn test_parse_default_deploy() {
        let cli = Cli::parse_from(["scripts", "deploy"]);
        assert_eq!(cli.network, Network::Devnet);
        assert!(cli.rpc_url.is_none());

        let Command::Deploy(args) = cli.command;
        assert_eq!(args.contract, "NFTMarketplace");
        assert!(args.ctor_args.is_empty());
    }

    #[test]
    fn test_parse_deploy_with_args() {
        let cli = Cli::parse_from([
            "scripts",
            "--network",
            "sepolia",
            "deploy",
            "--contract",
            "Parameterized",
            "--ctor-arg",
            "0x000000000000000000000000000000000000dead",
            "--ctor-arg",
            "42",
            "--confirmations",
            "2",
            "--timeout-secs",
            "60",
        ]);

        assert_eq!(cli.network, Network::Sepolia);
        let Command::Deploy(args) = cli.command;
        assert_eq!(args.contract, "Parameterized");
        assert_eq!(args.ctor_args.len(), 2);
        assert_eq!(args.confirmations, 2);
        assert_eq!(args.timeout_secs, 60);
    }
}
