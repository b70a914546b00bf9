//! Definition of the CLI arguments for integration tests

use std::fmt::{self, Display};

use clap::{Parser, ValueEnum};
use scripts::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes that the devnet is up and that the marketplace contract artifacts
/// have already been built into the artifacts directory.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run
    #[arg(short, long)]
    pub(crate) test: Tests,

    /// Directory containing the contract build artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub(crate) artifacts_dir: String,

    /// Devnet private key, defaults to the default funded devnet account
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

/// The integration tests
#[derive(ValueEnum, Clone, Copy)]
pub(crate) enum Tests {
    /// Deploy the marketplace contract and check the reported address
    DeployMarketplace,
    /// Deploy twice with identical arguments and check the addresses differ
    RepeatedDeploy,
    /// Request an unknown contract and check no transaction is broadcast
    MissingArtifact,
    /// Point the client at an unreachable RPC URL and check the failure
    UnreachableUrl,
}

impl Display for Tests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tests::DeployMarketplace => write!(f, "deploy-marketplace"),
            Tests::RepeatedDeploy => write!(f, "repeated-deploy"),
            Tests::MissingArtifact => write!(f, "missing-artifact"),
            Tests::UnreachableUrl => write!(f, "unreachable-url"),
        }
    }
}
