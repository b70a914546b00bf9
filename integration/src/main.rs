//! Integration tests for the deploy scripts. These assume that a devnet is already running locally.

use clap::Parser;
use cli::{Cli, Tests};
use eyre::Result;
use scripts::config::{Network, NetworkProfile};
use tests::{
    test_deploy_marketplace, test_missing_artifact, test_repeated_deploy, test_unreachable_url,
};

mod cli;
mod constants;
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        artifacts_dir,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let profile = NetworkProfile::resolve(Network::Devnet, Some(rpc_url), Some(priv_key))?;

    match test {
        Tests::DeployMarketplace => test_deploy_marketplace(&profile, &artifacts_dir).await?,
        Tests::RepeatedDeploy => test_repeated_deploy(&profile, &artifacts_dir).await?,
        Tests::MissingArtifact => test_missing_artifact(&profile, &artifacts_dir).await?,
        Tests::UnreachableUrl => test_unreachable_url().await?,
    }

    println!("{}: PASS", test);

    Ok(())
}
