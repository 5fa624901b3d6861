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

//! CLI for deploying the Hotpot factory and minting beacon-proxy instances.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

mod commands;
mod config;

use commands::Command;
use config::GlobalConfig;

/// Deployment CLI for the Hotpot factory/beacon-proxy lifecycle.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    #[clap(flatten)]
    config: GlobalConfig,

    #[clap(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    cli.command.run(&cli.config).await
}
