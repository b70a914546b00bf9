//! Implementations of the integration tests

use ethers::{providers::Middleware, types::Address};
use eyre::{ensure, eyre, Result};
use scripts::{
    artifacts::ArtifactRegistry,
    commands::deploy_contract,
    config::{Network, NetworkProfile},
    constants::{MARKETPLACE_CONTRACT_NAME, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    utils::setup_client,
};

use crate::constants::{DEVNET_CONFIRM_TIMEOUT, MISSING_CONTRACT_NAME, UNREACHABLE_RPC_URL};

/// Deploys the marketplace contract with zero constructor arguments and
/// checks the reported address
pub(crate) async fn test_deploy_marketplace(
    profile: &NetworkProfile,
    artifacts_dir: &str,
) -> Result<()> {
    let client = setup_client(profile).await?;
    let registry = ArtifactRegistry::new(artifacts_dir);
    let artifact = registry.load(MARKETPLACE_CONTRACT_NAME)?;

    let result = deploy_contract(
        &artifact,
        &[],
        NUM_DEPLOY_CONFIRMATIONS,
        DEVNET_CONFIRM_TIMEOUT,
        client.clone(),
    )
    .await?;

    ensure!(
        result.deployed_address != Address::zero(),
        "deployed to the zero address"
    );

    let code = client.get_code(result.deployed_address, None).await?;
    ensure!(!code.is_empty(), "no code at the deployed address");

    Ok(())
}

/// Deploys the marketplace contract twice with identical arguments and
/// checks that the two deployments land at distinct addresses
pub(crate) async fn test_repeated_deploy(
    profile: &NetworkProfile,
    artifacts_dir: &str,
) -> Result<()> {
    let client = setup_client(profile).await?;
    let registry = ArtifactRegistry::new(artifacts_dir);
    let artifact = registry.load(MARKETPLACE_CONTRACT_NAME)?;

    let first = deploy_contract(
        &artifact,
        &[],
        NUM_DEPLOY_CONFIRMATIONS,
        DEVNET_CONFIRM_TIMEOUT,
        client.clone(),
    )
    .await?;
    let second = deploy_contract(
        &artifact,
        &[],
        NUM_DEPLOY_CONFIRMATIONS,
        DEVNET_CONFIRM_TIMEOUT,
        client,
    )
    .await?;

    ensure!(
        first.deployed_address != second.deployed_address,
        "repeated deployments returned the same address"
    );

    Ok(())
}

/// Requests a contract unknown to the artifact registry and checks that the
/// failure occurs before any transaction is broadcast
pub(crate) async fn test_missing_artifact(
    profile: &NetworkProfile,
    artifacts_dir: &str,
) -> Result<()> {
    let client = setup_client(profile).await?;
    let deployer = client
        .default_sender()
        .ok_or_else(|| eyre!("client has no sender attached"))?;

    let nonce_before = client.get_transaction_count(deployer, None).await?;

    let registry = ArtifactRegistry::new(artifacts_dir);
    let res = registry.load(MISSING_CONTRACT_NAME);
    ensure!(
        matches!(res, Err(ScriptError::ArtifactNotFound(_))),
        "expected an artifact-not-found error"
    );

    let nonce_after = client.get_transaction_count(deployer, None).await?;
    ensure!(
        nonce_before == nonce_after,
        "a transaction was broadcast for an unknown contract"
    );

    Ok(())
}

/// Points the client at an unreachable RPC URL and checks that setup fails
pub(crate) async fn test_unreachable_url() -> Result<()> {
    let profile = NetworkProfile::resolve(
        Network::Devnet,
        Some(UNREACHABLE_RPC_URL.to_string()),
        None, // priv_key_override
    )?;

    let res = setup_client(&profile).await;
    ensure!(
        res.is_err(),
        "client setup against an unreachable URL succeeded"
    );

    Ok(())
}
