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

//! Common configuration options for commands in the Hotpot CLI.

use std::{num::ParseIntError, path::PathBuf, time::Duration};

use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use anyhow::{Context, Result};
use clap::Args;
use tracing::level_filters::LevelFilter;

use hotpot_deploy::{ArtifactResolver, ChainMode};

/// Common configuration options for all commands.
#[derive(Args, Debug, Clone)]
pub struct GlobalConfig {
    /// Mnemonic of the deployer wallet.
    #[clap(long, env = "MNEMONIC", global = true, hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Which network profile to deploy against.
    ///
    /// `test` targets a local node and skips contract verification; `public`
    /// targets the public testnet. Any other value is an error.
    #[clap(long, env = "CHAIN_MODE", global = true, value_enum, default_value = "public")]
    pub chain_mode: ChainMode,

    /// Directory holding the compiled contract artifacts.
    #[clap(long, env = "HOTPOT_ARTIFACTS", global = true, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Ethereum transaction timeout in seconds.
    #[clap(long, env = "TX_TIMEOUT", global = true, value_parser = |arg: &str| -> Result<Duration, ParseIntError> {Ok(Duration::from_secs(arg.parse()?))})]
    pub tx_timeout: Option<Duration>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL", global = true, default_value = "info")]
    pub log_level: LevelFilter,
}

impl GlobalConfig {
    // NOTE: Required parameters are modeled as Option plus require_* accessors
    // rather than clap-native `required` groups, so that each pipeline
    // validates exactly its own subset and the error names the missing
    // parameter.

    /// Derive the transaction signer from [Self::mnemonic], or return an
    /// error that can be shown to the user.
    pub fn require_signer(&self) -> Result<PrivateKeySigner> {
        let phrase = self
            .mnemonic
            .as_deref()
            .filter(|phrase| !phrase.trim().is_empty())
            .context("Signing mnemonic not provided; please set --mnemonic or the MNEMONIC env var")?;
        MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .index(0)?
            .build()
            .context("failed to derive the signing key from the mnemonic")
    }

    /// Artifact resolver reading from [Self::artifacts_dir].
    pub fn artifact_resolver(&self) -> ArtifactResolver {
        ArtifactResolver::new(&self.artifacts_dir)
    }
}
