//! Implementations of the deploy scripts

use std::{sync::Arc, time::Duration};

use ethers::{
    abi::{
        token::{LenientTokenizer, Tokenizer},
        Token,
    },
    contract::ContractFactory,
    providers::Middleware,
    types::Address,
};
use tokio::time::timeout;
use tracing::info;

use crate::{
    artifacts::{ArtifactRegistry, ContractArtifact},
    cli::DeployArgs,
    config::DeployConfig,
    errors::ScriptError,
    utils::write_deployed_address,
};

/// The outcome of a single contract deployment
#[derive(Clone, Debug)]
pub struct DeploymentResult {
    /// The name of the deployed contract
    pub contract_name: String,
    /// The constructor arguments the contract was deployed with
    pub constructor_args: Vec<Token>,
    /// The address at which the contract was deployed
    pub deployed_address: Address,
}

/// Deploys the contract named by the CLI arguments, printing the deployed
/// address and recording it in the deployments file
pub async fn deploy(
    args: DeployArgs,
    config: &DeployConfig,
    client: Arc<impl Middleware>,
) -> Result<(), ScriptError> {
    // Artifact lookup precedes any network interaction, an unknown contract
    // fails before a transaction can be broadcast
    let registry = ArtifactRegistry::new(&config.artifacts_dir);
    let artifact = registry.load(&args.contract)?;

    let result = deploy_contract(
        &artifact,
        &args.ctor_args,
        args.confirmations,
        Duration::from_secs(args.timeout_secs),
        client,
    )
    .await?;

    println!(
        "{} deployed at {:#x}",
        result.contract_name, result.deployed_address
    );

    write_deployed_address(
        &config.deployments_path,
        &result.contract_name,
        result.deployed_address,
    )?;

    Ok(())
}

/// Deploys the given artifact with the given constructor arguments, waiting
/// up to `confirm_timeout` for the deployment transaction to be confirmed.
///
/// Each invocation broadcasts a fresh deployment transaction and yields a
/// new contract instance at a new address.
pub async fn deploy_contract(
    artifact: &ContractArtifact,
    ctor_args: &[String],
    confirmations: usize,
    confirm_timeout: Duration,
    client: Arc<impl Middleware>,
) -> Result<DeploymentResult, ScriptError> {
    let constructor_args = tokenize_ctor_args(artifact, ctor_args)?;

    let factory = ContractFactory::new(
        artifact.abi.clone(),
        artifact.bytecode.clone(),
        client.clone(),
    );

    let deployer = factory
        .deploy_tokens(constructor_args.clone())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(confirmations);

    info!(
        "submitting deployment transaction for {} ({} confirmations)",
        artifact.contract_name, confirmations
    );

    let contract = timeout(confirm_timeout, deployer.send())
        .await
        .map_err(|_| {
            ScriptError::ConfirmationTimeout(format!(
                "no confirmation after {}s",
                confirm_timeout.as_secs()
            ))
        })?
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let deployed_address = contract.address();

    verify_code_at(deployed_address, client).await?;

    Ok(DeploymentResult {
        contract_name: artifact.contract_name.clone(),
        constructor_args,
        deployed_address,
    })
}

/// Checks that contract code is present at the given address.
///
/// A resolved deployment implies the transaction was mined; this further
/// rules out a deployment whose constructor left no code behind.
async fn verify_code_at(
    address: Address,
    client: Arc<impl Middleware>,
) -> Result<(), ScriptError> {
    let code = client
        .get_code(address, None /* block */)
        .await
        .map_err(|e| ScriptError::ContractVerification(e.to_string()))?;

    if code.is_empty() {
        return Err(ScriptError::ContractVerification(format!(
            "no code at {:#x}",
            address
        )));
    }

    Ok(())
}

/// Encodes the string-form constructor arguments against the artifact's
/// constructor signature
fn tokenize_ctor_args(
    artifact: &ContractArtifact,
    ctor_args: &[String],
) -> Result<Vec<Token>, ScriptError> {
    let inputs = artifact.constructor_inputs();
    if inputs.len() != ctor_args.len() {
        return Err(ScriptError::CalldataConstruction(format!(
            "constructor takes {} arguments, {} provided",
            inputs.len(),
            ctor_args.len()
        )));
    }

    inputs
        .iter()
        .zip(ctor_args)
        .map(|(kind, value)| {
            LenientTokenizer::tokenize(kind, value)
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ethers::{
        abi::Token,
        types::{Address, U256},
    };

    use crate::{artifacts::ContractArtifact, errors::ScriptError};

    use super::tokenize_ctor_args;

    /// An artifact whose constructor takes an address and a fee
    const PARAMETERIZED_ARTIFACT: &str = r#"{
        "contractName": "Parameterized",
        "abi": [
            {
                "inputs": [
                    { "internalType": "address", "name": "owner", "type": "address" },
                    { "internalType": "uint256", "name": "fee", "type": "uint256" }
                ],
                "stateMutability": "nonpayable",
                "type": "constructor"
            }
        ],
        "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3"
    }"#;

    /// An artifact with an implicit zero-argument constructor
    const NO_CTOR_ARTIFACT: &str = r#"{
        "contractName": "NoConstructor",
        "abi": [],
        "bytecode": "0x600a600c600039600a6000f3602a60005260206000f3"
    }"#;

    #[test]
    fn test_tokenize_zero_args() {
        let artifact = ContractArtifact::from_json(NO_CTOR_ARTIFACT).unwrap();
        let tokens = tokenize_ctor_args(&artifact, &[]).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_typed_args() {
        let artifact = ContractArtifact::from_json(PARAMETERIZED_ARTIFACT).unwrap();
        let args = vec![
            "000000000000000000000000000000000000dead".to_string(),
            "42".to_string(),
        ];

        let tokens = tokenize_ctor_args(&artifact, &args).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Address(Address::from_low_u64_be(0xdead)),
                Token::Uint(U256::from(42)),
            ],
        );
    }

    #[test]
    fn test_tokenize_arity_mismatch() {
        let artifact = ContractArtifact::from_json(PARAMETERIZED_ARTIFACT).unwrap();
        let args = vec!["42".to_string()];

        let res = tokenize_ctor_args(&artifact, &args);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }
}
