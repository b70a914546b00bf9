//! Definitions of errors that can occur during the execution of the contract management scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the contract management scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error resolving the network profile configuration
    ConfigResolution(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The requested contract is not present in the artifact registry
    ArtifactNotFound(String),
    /// Error parsing a contract build artifact
    ArtifactParsing(String),
    /// Error constructing constructor calldata
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Timed out waiting for the deployment transaction to be confirmed
    ConfirmationTimeout(String),
    /// The deployed address does not contain contract code
    ContractVerification(String),
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ConfigResolution(s) => write!(f, "error resolving configuration: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ArtifactNotFound(s) => write!(f, "no artifact found for contract: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ConfirmationTimeout(s) => {
                write!(f, "timed out awaiting confirmation: {}", s)
            }
            ScriptError::ContractVerification(s) => {
                write!(f, "error verifying deployed contract: {}", s)
            }
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
