// Copyright 2025 Hotpot Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolution of compiled contract artifacts.
//!
//! Artifacts are the hardhat-format JSON bundles emitted by the contract
//! build, one file per contract. The resolver only reads build output; it has
//! no other side effects, and a missing artifact is a fatal error raised
//! before any network connection is opened.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Compiled interface and bytecode for one contract.
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    /// Contract name, e.g. `HotpotFactory`.
    #[serde(rename = "contractName")]
    pub name: String,
    /// Source path within the contracts package, e.g.
    /// `contracts/HotpotFactory.sol`.
    #[serde(rename = "sourceName")]
    pub source_name: String,
    /// The contract ABI.
    pub abi: JsonAbi,
    /// Deployment bytecode, `0x`-prefixed in the JSON.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Fully-qualified contract identifier, as the verification backend
    /// expects it, e.g. `contracts/HotpotFactory.sol:HotpotFactory`.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.name)
    }
}

/// Maps contract names to their compiled artifact bundles.
#[derive(Clone, Debug)]
pub struct ArtifactResolver {
    dir: PathBuf,
}

impl ArtifactResolver {
    /// Create a resolver reading from the given build output directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Load the artifact for the given contract name.
    pub fn resolve(&self, name: &str) -> Result<ContractArtifact> {
        let path = self.dir.join(format!("{name}.json"));
        let raw = fs::read_to_string(&path).with_context(|| {
            format!("artifact not found for contract {name}; looked for {}", path.display())
        })?;
        let artifact: ContractArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse artifact {}", path.display()))?;
        ensure!(
            !artifact.bytecode.is_empty(),
            "artifact for contract {name} has empty bytecode; is {} an interface?",
            path.display()
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        let json = serde_json::json!({
            "contractName": name,
            "sourceName": format!("contracts/{name}.sol"),
            "abi": [{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{"name": "implementation", "type": "address", "internalType": "address"}],
            }],
            "bytecode": bytecode,
        });
        fs::write(dir.join(format!("{name}.json")), json.to_string()).unwrap();
    }

    #[test]
    fn resolves_artifact_by_contract_name() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "HotpotFactory", "0x6080604052");

        let resolver = ArtifactResolver::new(dir.path());
        let artifact = resolver.resolve("HotpotFactory").unwrap();
        assert_eq!(artifact.name, "HotpotFactory");
        assert_eq!(artifact.fully_qualified_name(), "contracts/HotpotFactory.sol:HotpotFactory");
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi.constructor().is_some());
    }

    #[test]
    fn unknown_contract_name_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ArtifactResolver::new(dir.path());
        let err = resolver.resolve("Hotpot").unwrap_err();
        assert!(err.to_string().contains("artifact not found for contract Hotpot"));
    }

    #[test]
    fn empty_bytecode_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "IHotpot", "0x");

        let resolver = ArtifactResolver::new(dir.path());
        let err = resolver.resolve("IHotpot").unwrap_err();
        assert!(err.to_string().contains("empty bytecode"));
    }
}
