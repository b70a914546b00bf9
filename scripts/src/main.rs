use clap::Parser;
use scripts::{
    cli::Cli,
    config::{DeployConfig, NetworkProfile},
    errors::ScriptError,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        rpc_url,
        priv_key,
        artifacts_dir,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let profile = NetworkProfile::resolve(network, rpc_url, priv_key)?;
    let config = DeployConfig {
        profile,
        artifacts_dir,
        deployments_path,
    };

    let client = setup_client(&config.profile).await?;

    command.run(&config, client).await
}
