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
    primitives::{utils::format_ether, Address},
    providers::ProviderBuilder,
    sol_types::SolValue,
};
use anyhow::Context;
use clap::Args;

use hotpot_deploy::{deploy, verify, NetworkProfile, VerifyRequest};

use crate::config::GlobalConfig;

const FACTORY_CONTRACT: &str = "HotpotFactory";

/// Command to deploy the singleton Hotpot factory.
#[derive(Args, Clone, Debug)]
pub struct DeployFactory {
    /// Address of the Hotpot implementation contract the factory will mint
    /// proxies against.
    #[clap(long, env = "HOTPOT_IMPLEMENTATION")]
    pub implementation: Option<Address>,
}

impl DeployFactory {
    /// Run the [DeployFactory] command.
    pub async fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        // Validate the full configuration subset and resolve the artifact
        // before any network connection is opened.
        let signer = global_config.require_signer()?;
        let implementation = self.implementation.context(
            "Implementation contract address not provided; please set --implementation or the HOTPOT_IMPLEMENTATION env var",
        )?;
        let profile = NetworkProfile::select(global_config.chain_mode);
        let artifact = global_config.artifact_resolver().resolve(FACTORY_CONTRACT)?;

        tracing::info!("Running deploy pipeline for {} on the {} profile", artifact.name, profile.mode);

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(profile.rpc_url.as_ref())
            .await
            .with_context(|| format!("failed to connect provider to {}", profile.rpc_url))?;

        let constructor_args = implementation.abi_encode();
        let fee = deploy::estimate_deploy_fee(&provider, &artifact, &constructor_args).await?;
        tracing::info!("The deployment is estimated to cost {} ETH", format_ether(fee));

        let deployed =
            deploy::deploy_factory(&provider, &artifact, implementation, global_config.tx_timeout)
                .await?;
        tracing::info!("{} was deployed to {}", deployed.contract_name, deployed.address);

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
