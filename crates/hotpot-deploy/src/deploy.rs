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

//! Deployment steps shared by the Hotpot pipelines.
//!
//! Each function here is one blocking step of a linear pipeline: it sends at
//! most one transaction and waits for its receipt before returning. A
//! reverted transaction or provider error is fatal to the run; nothing is
//! mutated on-chain until a transaction confirms, so there is no partial
//! state to clean up.

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::{SolCall, SolValue},
};
use anyhow::{ensure, Context, Result};

use crate::{
    artifacts::ContractArtifact,
    contracts::{extract_tx_log, IHotpot, IHotpotFactory},
    params::InitParams,
};

/// A contract deployed by one pipeline step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContractRef {
    /// On-chain address of the deployed contract.
    pub address: Address,
    /// Name of the artifact it was deployed from.
    pub contract_name: String,
    /// Hash of the deployment transaction.
    pub tx_hash: B256,
}

/// Build the create transaction for an artifact and its ABI-encoded
/// constructor arguments.
fn deploy_request(
    artifact: &ContractArtifact,
    constructor_args: &[u8],
) -> Result<TransactionRequest> {
    ensure!(!artifact.bytecode.is_empty(), "artifact for {} has empty bytecode", artifact.name);
    if !constructor_args.is_empty() {
        ensure!(
            artifact.abi.constructor().is_some(),
            "constructor arguments provided, but {} declares no constructor",
            artifact.name
        );
    }
    let code = [artifact.bytecode.as_ref(), constructor_args].concat();
    Ok(TransactionRequest::default().with_deploy_code(code))
}

/// Estimate the cost of deploying an artifact, in wei.
///
/// Purely informational for the operator; the estimate is logged by the
/// caller and never gates the deployment. Read-only, so calling it repeatedly
/// against unchanged network state returns the same result up to provider
/// tolerance.
pub async fn estimate_deploy_fee<P: Provider>(
    provider: P,
    artifact: &ContractArtifact,
    constructor_args: &[u8],
) -> Result<U256> {
    let tx = deploy_request(artifact, constructor_args)?;
    let gas = provider
        .estimate_gas(tx)
        .await
        .with_context(|| format!("failed to estimate deployment gas for {}", artifact.name))?;
    let gas_price = provider.get_gas_price().await.context("failed to fetch the gas price")?;
    Ok(U256::from(gas) * U256::from(gas_price))
}

/// Deploy a contract and wait for its on-chain confirmation.
pub async fn deploy_contract<P: Provider>(
    provider: P,
    artifact: &ContractArtifact,
    constructor_args: &[u8],
    timeout: Option<Duration>,
) -> Result<DeployedContractRef> {
    let tx = deploy_request(artifact, constructor_args)?;
    let pending = provider
        .send_transaction(tx)
        .await
        .with_context(|| format!("sending deployment transaction for {} failed", artifact.name))?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(%tx_hash, contract = %artifact.name, "Waiting for deployment receipt");

    let receipt = pending
        .with_timeout(timeout)
        .get_receipt()
        .await
        .with_context(|| format!("failed to receive receipt deploying {}", artifact.name))?;
    ensure!(
        receipt.status(),
        "deployment transaction for {} reverted: tx_hash = {}",
        artifact.name,
        receipt.transaction_hash
    );
    let address = receipt.contract_address.with_context(|| {
        format!("deployment receipt for {} is missing the contract address", artifact.name)
    })?;

    Ok(DeployedContractRef { address, contract_name: artifact.name.clone(), tx_hash })
}

/// Deploy the singleton Hotpot factory.
///
/// The factory's only constructor argument is the address of the shared
/// implementation contract every minted proxy will delegate to.
pub async fn deploy_factory<P: Provider>(
    provider: P,
    artifact: &ContractArtifact,
    implementation: Address,
    timeout: Option<Duration>,
) -> Result<DeployedContractRef> {
    deploy_contract(provider, artifact, &implementation.abi_encode(), timeout).await
}

/// Deploy a new beacon proxy pointing at an already-deployed beacon.
///
/// The proxy's constructor takes the beacon address and the encoded
/// initializer call, so the instance is initialized within its own deployment
/// transaction; a confirmed-but-uninitialized proxy cannot be observed.
pub async fn deploy_beacon_proxy<P: Provider>(
    provider: P,
    artifact: &ContractArtifact,
    beacon: Address,
    owner: Address,
    params: &InitParams,
    timeout: Option<Duration>,
) -> Result<DeployedContractRef> {
    let init_data = IHotpot::initializeCall { owner, params: params.into() }.abi_encode();
    let constructor_args = (beacon, Bytes::from(init_data)).abi_encode_params();
    deploy_contract(provider, artifact, &constructor_args, timeout).await
}

/// Create a new Hotpot instance through an already-deployed factory.
///
/// The new instance's address is recovered from the `HotpotDeployed` event in
/// the creation receipt rather than by re-reading the factory's instance
/// registry by position, so the result is correct no matter how many
/// instances the factory has minted before.
pub async fn create_instance<P: Provider>(
    provider: P,
    factory: Address,
    params: &InitParams,
    timeout: Option<Duration>,
) -> Result<DeployedContractRef> {
    let factory = IHotpotFactory::new(factory, provider);
    let pending = factory
        .deployHotpot(params.into())
        .send()
        .await
        .context("sending deployHotpot transaction failed")?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(%tx_hash, "Waiting for deployHotpot receipt");

    let receipt = pending
        .with_timeout(timeout)
        .get_receipt()
        .await
        .context("failed to receive receipt for deployHotpot transaction")?;
    ensure!(
        receipt.status(),
        "deployHotpot transaction reverted: tx_hash = {}",
        receipt.transaction_hash
    );

    let log = extract_tx_log::<IHotpotFactory::HotpotDeployed>(&receipt)?;
    Ok(DeployedContractRef { address: log.data().hotpot, contract_name: "Hotpot".to_string(), tx_hash })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    fn artifact(bytecode: &[u8], with_constructor: bool) -> ContractArtifact {
        let abi = match with_constructor {
            true => serde_json::from_str(
                r#"[{"type": "constructor", "stateMutability": "nonpayable",
                     "inputs": [{"name": "implementation", "type": "address", "internalType": "address"}]}]"#,
            )
            .unwrap(),
            false => alloy::json_abi::JsonAbi::new(),
        };
        ContractArtifact {
            name: "HotpotFactory".to_string(),
            source_name: "contracts/HotpotFactory.sol".to_string(),
            abi,
            bytecode: Bytes::copy_from_slice(bytecode),
        }
    }

    #[test]
    fn deploy_request_appends_constructor_args_to_bytecode() {
        let implementation = address!("3333333333333333333333333333333333333333");
        let tx =
            deploy_request(&artifact(&[0xde, 0xad], true), &implementation.abi_encode()).unwrap();

        let input = tx.input.input().unwrap();
        assert_eq!(&input[..2], &[0xde, 0xad]);
        assert_eq!(input.len(), 2 + 32);
        assert_eq!(&input[2 + 12..], implementation.as_slice());
        assert_eq!(tx.to, Some(alloy::primitives::TxKind::Create));
    }

    #[test]
    fn deploy_request_rejects_args_without_a_constructor() {
        let implementation = address!("3333333333333333333333333333333333333333");
        let err = deploy_request(&artifact(&[0xde, 0xad], false), &implementation.abi_encode())
            .unwrap_err();
        assert!(err.to_string().contains("declares no constructor"));
    }

    #[test]
    fn deploy_request_rejects_empty_bytecode() {
        let err = deploy_request(&artifact(&[], false), &[]).unwrap_err();
        assert!(err.to_string().contains("empty bytecode"));
    }
}
