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

//! Commands of the Hotpot CLI. Each command is one deployment pipeline.

mod create_instance;
mod deploy_factory;
mod deploy_proxy;

pub use create_instance::CreateInstance;
pub use deploy_factory::DeployFactory;
pub use deploy_proxy::DeployProxy;

use clap::Subcommand;

use crate::config::GlobalConfig;

/// Deployment pipelines.
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Deploy the singleton Hotpot factory.
    DeployFactory(DeployFactory),
    /// Create a new Hotpot instance through an already-deployed factory.
    CreateInstance(CreateInstance),
    /// Deploy a new Hotpot beacon proxy directly against a beacon.
    DeployProxy(DeployProxy),
}

impl Command {
    /// Run the command.
    pub async fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        match self {
            Self::DeployFactory(cmd) => cmd.run(global_config).await,
            Self::CreateInstance(cmd) => cmd.run(global_config).await,
            Self::DeployProxy(cmd) => cmd.run(global_config).await,
        }
    }
}
