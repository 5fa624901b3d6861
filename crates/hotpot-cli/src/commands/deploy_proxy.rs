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

use alloy::{
    primitives::{utils::format_ether, Address, Bytes},
    providers::ProviderBuilder,
    signers::Signer,
    sol_types::{SolCall, SolValue},
};
use anyhow::Context;
use clap::Args;

use hotpot_deploy::{
    contracts::IHotpot, deploy, verify, InitParams, NetworkProfile, VerifyRequest,
};

use crate::config::GlobalConfig;

const PROXY_CONTRACT: &str = "BeaconProxy";

/// Command to deploy a new Hotpot beacon proxy directly against a beacon.
#[derive(Args, Clone, Debug)]
pub struct DeployProxy {
    /// Address of the upgradeable beacon the proxy will delegate to.
    #[clap(long, env = "BEACON")]
    pub beacon: Option<Address>,

    /// Address of the marketplace contract the instance trades against. Also
    /// used as the provisional operator until the post-deploy administrative
    /// reassignment.
    #[clap(long, env = "MARKETPLACE")]
    pub marketplace: Option<Address>,
}

impl DeployProxy {
    /// Run the [DeployProxy] command.
    pub async fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let signer = global_config.require_signer()?;
        let beacon = self.beacon.context(
            "Beacon contract address not provided; please set --beacon or the BEACON env var",
        )?;
        let marketplace = self.marketplace.context(
            "Marketplace contract address not provided; please set --marketplace or the MARKETPLACE env var",
        )?;
        let profile = NetworkProfile::select(global_config.chain_mode);
        let artifact = global_config.artifact_resolver().resolve(PROXY_CONTRACT)?;

        tracing::info!(
            "Deploying a new Hotpot beacon proxy against the beacon at {beacon} on the {} profile",
            profile.mode
        );

        let owner = signer.address();
        let params = InitParams::testnet_defaults(marketplace);

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(profile.rpc_url.as_ref())
            .await
            .with_context(|| format!("failed to connect provider to {}", profile.rpc_url))?;

        // Same constructor encoding the deploy step uses, computed here for
        // the fee estimate and the verification request.
        let init_data = IHotpot::initializeCall { owner, params: (&params).into() }.abi_encode();
        let constructor_args = (beacon, Bytes::from(init_data)).abi_encode_params();

        let fee = deploy::estimate_deploy_fee(&provider, &artifact, &constructor_args).await?;
        tracing::info!("The deployment is estimated to cost {} ETH", format_ether(fee));

        let deployed = deploy::deploy_beacon_proxy(
            &provider,
            &artifact,
            beacon,
            owner,
            &params,
            global_config.tx_timeout,
        )
        .await?;
        tracing::info!("Hotpot beacon proxy was deployed to {}", deployed.address);

        let request = VerifyRequest {
            contract_address: deployed.address,
            contract_name: artifact.fully_qualified_name(),
            bytecode: artifact.bytecode.clone(),
            constructor_arguments: constructor_args.into(),
        };
        verify::submit_or_skip(&profile, &request).await;

        Ok(())
    }
}
