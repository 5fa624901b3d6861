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

//! Submission of deployed contracts to the block-explorer verification
//! backend.
//!
//! Verification is gated on the active [NetworkProfile]: the test profile
//! carries no verification endpoint and the submission is skipped entirely.
//! A failed submission is reported and swallowed; the deployment is already
//! final on-chain regardless of verification outcome.

use alloy::primitives::{Address, Bytes};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::network::NetworkProfile;

/// A contract verification request, as the explorer backend consumes it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// On-chain address of the deployed contract.
    pub contract_address: Address,
    /// Fully-qualified contract identifier, e.g.
    /// `contracts/HotpotFactory.sol:HotpotFactory`.
    pub contract_name: String,
    /// Deployment bytecode from the compiled artifact.
    pub bytecode: Bytes,
    /// ABI-encoded constructor arguments.
    pub constructor_arguments: Bytes,
}

/// Outcome of a gated verification attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The backend accepted the request and returned an identifier.
    Submitted {
        /// Verification request identifier assigned by the backend.
        id: String,
    },
    /// The active profile has no verification endpoint.
    Skipped,
    /// Submission failed; the deployment itself is unaffected.
    Failed,
}

/// Submit a verification request and return the backend's request identifier.
pub async fn submit(verify_url: &str, request: &VerifyRequest) -> Result<String> {
    let response = reqwest::Client::new()
        .post(verify_url)
        .json(request)
        .send()
        .await
        .with_context(|| format!("failed to reach the verification endpoint {verify_url}"))?
        .error_for_status()
        .context("verification endpoint returned an error status")?;
    let id = response.text().await.context("failed to read the verification response")?;
    Ok(id.trim().to_string())
}

/// Submit a verification request if the active profile carries a verification
/// endpoint, logging the outcome either way.
///
/// Verification failure is never fatal: a deployment is final on-chain before
/// this step runs.
pub async fn submit_or_skip(profile: &NetworkProfile, request: &VerifyRequest) -> VerifyOutcome {
    let Some(verify_url) = profile.verify_url.as_deref() else {
        tracing::info!("Contract not verified, deployed on the {} profile", profile.mode);
        return VerifyOutcome::Skipped;
    };

    match submit(verify_url, request).await {
        Ok(id) => {
            tracing::info!(%id, contract = %request.contract_name, "Verification request submitted");
            VerifyOutcome::Submitted { id }
        }
        Err(err) => {
            tracing::warn!(
                contract = %request.contract_name,
                "Contract verification failed; the deployment is unaffected: {err:#}"
            );
            VerifyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::network;

    fn request() -> VerifyRequest {
        VerifyRequest {
            contract_address: address!("4444444444444444444444444444444444444444"),
            contract_name: "contracts/HotpotFactory.sol:HotpotFactory".to_string(),
            bytecode: Bytes::from(vec![0x60, 0x80]),
            constructor_arguments: Bytes::new(),
        }
    }

    #[tokio::test]
    async fn skipped_on_profile_without_verification_endpoint() {
        // Must not touch the network at all; the test environment has no
        // verification backend to reach.
        let outcome = submit_or_skip(&network::LOCAL, &request()).await;
        assert_eq!(outcome, VerifyOutcome::Skipped);
    }

    #[test]
    fn request_serializes_with_explorer_field_names() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(
            json["contractAddress"],
            "0x4444444444444444444444444444444444444444"
        );
        assert_eq!(json["contractName"], "contracts/HotpotFactory.sol:HotpotFactory");
        assert_eq!(json["bytecode"], "0x6080");
        assert_eq!(json["constructorArguments"], "0x");
    }
}
