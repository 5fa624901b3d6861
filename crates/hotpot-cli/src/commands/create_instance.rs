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

use alloy::{primitives::Address, providers::ProviderBuilder};
use anyhow::Context;
use clap::Args;

use hotpot_deploy::{deploy, verify, InitParams, NetworkProfile, VerifyRequest};

use crate::config::GlobalConfig;

const INSTANCE_CONTRACT: &str = "Hotpot";

/// Command to create a new Hotpot instance through an already-deployed
/// factory.
#[derive(Args, Clone, Debug)]
pub struct CreateInstance {
    /// Address of the deployed Hotpot factory.
    #[clap(long, env = "HOTPOT_FACTORY")]
    pub factory: Option<Address>,

    /// Address of the marketplace contract the instance trades against. Also
    /// used as the provisional operator until the post-deploy administrative
    /// reassignment.
    #[clap(long, env = "MARKETPLACE")]
    pub marketplace: Option<Address>,
}

impl CreateInstance {
    /// Run the [CreateInstance] command.
    pub async fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        let signer = global_config.require_signer()?;
        let factory = self.factory.context(
            "Factory contract address not provided; please set --factory or the HOTPOT_FACTORY env var",
        )?;
        let marketplace = self.marketplace.context(
            "Marketplace contract address not provided; please set --marketplace or the MARKETPLACE env var",
        )?;
        let profile = NetworkProfile::select(global_config.chain_mode);
        let artifact = global_config.artifact_resolver().resolve(INSTANCE_CONTRACT)?;

        tracing::info!(
            "Creating a new {} instance with the factory at {factory} on the {} profile",
            artifact.name,
            profile.mode
        );

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(profile.rpc_url.as_ref())
            .await
            .with_context(|| format!("failed to connect provider to {}", profile.rpc_url))?;

        let params = InitParams::testnet_defaults(marketplace);
        let deployed =
            deploy::create_instance(&provider, factory, &params, global_config.tx_timeout).await?;
        tracing::info!("{} was deployed to {}", deployed.contract_name, deployed.address);

        // The factory mints the proxy, so there are no local constructor
        // arguments to submit, and the implementation artifact's bytecode
        // will not match the minted proxy's deployed code; the backend may
        // reject the request, which is non-fatal like any other verification
        // failure.
        let request = VerifyRequest {
            contract_address: deployed.address,
            contract_name: artifact.fully_qualified_name(),
            bytecode: artifact.bytecode.clone(),
            constructor_arguments: Default::default(),
        };
        verify::submit_or_skip(&profile, &request).await;

        Ok(())
    }
}
