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

//! Network profiles for Hotpot deployments.

use std::{borrow::Cow, fmt};

use clap::ValueEnum;

/// Which network a pipeline run targets.
///
/// This is a closed enumeration: anything other than `test` or `public` is a
/// parse error, so a typo cannot silently send a deployment to the public
/// network.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainMode {
    /// Local test node.
    Test,
    /// Public testnet.
    Public,
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// Endpoints for one network, selected once per run and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    /// The mode this profile was selected for.
    pub mode: ChainMode,
    /// RPC endpoint transactions are sent to.
    pub rpc_url: Cow<'static, str>,
    /// L1 settlement layer endpoint.
    pub settlement_rpc_url: Cow<'static, str>,
    /// Block-explorer contract verification endpoint. Absent on the test
    /// profile; absence is what disables verification for a run.
    pub verify_url: Option<Cow<'static, str>>,
}

/// [NetworkProfile] for a local test node.
pub const LOCAL: NetworkProfile = NetworkProfile {
    mode: ChainMode::Test,
    rpc_url: Cow::Borrowed("http://localhost:3050"),
    settlement_rpc_url: Cow::Borrowed("http://localhost:8545"),
    verify_url: None,
};

/// [NetworkProfile] for the public testnet.
pub const TESTNET: NetworkProfile = NetworkProfile {
    mode: ChainMode::Public,
    rpc_url: Cow::Borrowed("https://zksync2-testnet.zksync.dev"),
    settlement_rpc_url: Cow::Borrowed("https://rpc.ankr.com/eth_goerli"),
    verify_url: Some(Cow::Borrowed(
        "https://zksync2-testnet-explorer.zksync.dev/contract_verification",
    )),
};

impl NetworkProfile {
    /// Return the profile for the given mode.
    pub fn select(mode: ChainMode) -> NetworkProfile {
        match mode {
            ChainMode::Test => LOCAL,
            ChainMode::Public => TESTNET,
        }
    }
}
