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

//! Smart contract interfaces for the Hotpot factory and instances.

use std::fmt::Debug;

use alloy::{
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};
use anyhow::{anyhow, Context, Result};

alloy::sol!(
    #![sol(rpc, all_derives)]

    /// Instance-level configuration consumed by the Hotpot initializer.
    ///
    /// Field order must match the on-chain initializer signature exactly;
    /// the ABI encoding is positional, so a reordering here would initialize
    /// the instance with garbage without any error.
    struct InitializeParams {
        uint256 potLimit;
        uint256 raffleTicketCost;
        uint128 claimWindow;
        uint16 numberOfWinners;
        uint16 fee;
        uint16 tradeFee;
        address marketplace;
        address operator;
    }

    interface IHotpotFactory {
        event HotpotDeployed(address indexed hotpot, address indexed owner);

        function deployHotpot(InitializeParams calldata params) external;
    }

    interface IHotpot {
        function initialize(address owner, InitializeParams calldata params) external;
    }
);

/// Extract the single `E` event emitted by a confirmed transaction.
///
/// Fails if the receipt holds zero, or more than one, log matching the event
/// signature.
pub fn extract_tx_log<E: SolEvent + Debug + Clone>(receipt: &TransactionReceipt) -> Result<Log<E>> {
    let mut logs = receipt
        .inner
        .logs()
        .iter()
        .filter(|log| log.topic0().map(|topic| E::SIGNATURE_HASH == *topic).unwrap_or(false))
        .map(|log| {
            log.log_decode::<E>().with_context(|| format!("failed to decode event {}", E::SIGNATURE))
        })
        .collect::<Result<Vec<_>>>()?;

    match logs.len() {
        1 => Ok(logs.remove(0)),
        0 => Err(anyhow!(
            "transaction 0x{:x} did not emit event {}",
            receipt.transaction_hash,
            E::SIGNATURE
        )),
        _ => Err(anyhow!(
            "transaction 0x{:x} emitted more than one event with signature {}",
            receipt.transaction_hash,
            E::SIGNATURE
        )),
    }
}
