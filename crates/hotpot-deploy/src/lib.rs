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

//! Deployment orchestration for the Hotpot factory and its beacon proxies.
//!
//! Hotpot instances are upgradeable beacon proxies minted by a singleton
//! factory contract. This crate provides the pieces each deployment pipeline
//! is assembled from: network profile selection, compiled-artifact
//! resolution, initializer-parameter encoding, the deploy and fee-estimation
//! steps themselves, and post-deploy submission to the block-explorer
//! verification backend.
//!
//! Every pipeline is a single linear chain of awaits: each on-chain step
//! waits for its transaction receipt before the next side effect is issued.
//! Configuration and artifact resolution errors are raised before any
//! network connection is opened.

pub mod artifacts;
pub mod contracts;
pub mod deploy;
pub mod network;
pub mod params;
pub mod verify;

pub use artifacts::{ArtifactResolver, ContractArtifact};
pub use deploy::DeployedContractRef;
pub use network::{ChainMode, NetworkProfile};
pub use params::InitParams;
pub use verify::{VerifyOutcome, VerifyRequest};
