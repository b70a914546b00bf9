//! Utilities for the deploy scripts.

use std::{fs, path::PathBuf, str::FromStr, sync::Arc};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::Address,
};
use json::JsonValue;

use crate::{config::NetworkProfile, constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Sets up the client with which to deploy contracts, wrapping an HTTP
/// provider for the profile's RPC endpoint in signer middleware for the
/// profile's deployer key.
pub async fn setup_client(profile: &NetworkProfile) -> Result<Arc<impl Middleware>, ScriptError> {
    let provider = Provider::<Http>::try_from(profile.rpc_url.as_str())
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(profile.deployer_key())
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    // A profile with a pinned chain id must not silently sign for another network
    if let Some(expected) = profile.chain_id {
        if chain_id != expected {
            return Err(ScriptError::ClientInitialization(format!(
                "network reported chain id {}, profile expects {}",
                chain_id, expected
            )));
        }
    }

    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Parses the file at the given path as JSON
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Reads the recorded deployed address for the given contract from the
/// deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Records the deployed address for the given contract in the deployments
/// file, overwriting any previously recorded address
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{:#x}", address));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}
