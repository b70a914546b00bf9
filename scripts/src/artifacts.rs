//! The contract build-artifact registry
//!
//! Deployable contracts are addressed by name and backed by Hardhat-format
//! JSON artifacts emitted by the (external) Solidity build.

use std::{fs, path::PathBuf};

use ethers::{
    abi::{Abi, ParamType},
    types::Bytes,
};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A contract build artifact, as emitted by the Solidity toolchain
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: Abi,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parses an artifact from its JSON representation
    pub fn from_json(json_str: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json_str).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// The parameter types of the contract's constructor, in ABI order.
    ///
    /// A contract without an explicit constructor takes no arguments.
    pub fn constructor_inputs(&self) -> Vec<ParamType> {
        self.abi
            .constructor()
            .map(|c| c.inputs.iter().map(|param| param.kind.clone()).collect())
            .unwrap_or_default()
    }
}

/// A registry of contract build artifacts rooted at a directory
#[derive(Clone, Debug)]
pub struct ArtifactRegistry {
    /// The directory containing the artifacts
    dir: PathBuf,
}

impl ArtifactRegistry {
    /// Creates a registry rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path at which the artifact for the given contract is expected
    pub fn artifact_path(&self, contract_name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", contract_name, ARTIFACT_EXTENSION))
    }

    /// Loads the artifact for the given contract name.
    ///
    /// An unknown contract name fails here, before any network interaction.
    pub fn load(&self, contract_name: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.artifact_path(contract_name);
        if !path.exists() {
            return Err(ScriptError::ArtifactNotFound(contract_name.to_string()));
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        ContractArtifact::from_json(&contents)
    }
}
