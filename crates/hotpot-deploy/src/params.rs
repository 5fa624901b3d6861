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

//! Initializer parameters for a Hotpot instance.

use alloy::primitives::{Address, U256};

use crate::contracts::InitializeParams;

/// Pot limit for testnet instances: 2 ETH.
pub const DEFAULT_POT_LIMIT_WEI: u128 = 2_000_000_000_000_000_000;
/// Raffle ticket cost for testnet instances: 0.2 ETH.
pub const DEFAULT_RAFFLE_TICKET_COST_WEI: u128 = 200_000_000_000_000_000;
/// Claim window for testnet instances, in blocks.
pub const DEFAULT_CLAIM_WINDOW: u128 = 450_000;
/// Number of raffle winners per pot for testnet instances.
pub const DEFAULT_NUMBER_OF_WINNERS: u16 = 2;
/// Flat fee for testnet instances.
pub const DEFAULT_FEE: u16 = 0;
/// Trade fee for testnet instances, in basis points.
pub const DEFAULT_TRADE_FEE_BPS: u16 = 1000;

/// Instance-level configuration passed to the Hotpot initializer.
///
/// Serialized on-chain as the fixed-order tuple `{potLimit, raffleTicketCost,
/// claimWindow, numberOfWinners, fee, tradeFee, marketplace, operator}` via
/// [InitializeParams].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitParams {
    /// Maximum pot size, in wei.
    pub pot_limit: U256,
    /// Cost of one raffle ticket, in wei.
    pub raffle_ticket_cost: U256,
    /// How long winners have to claim, in blocks.
    pub claim_window: u128,
    /// Winners drawn per pot.
    pub number_of_winners: u16,
    /// Flat fee taken by the protocol.
    pub fee: u16,
    /// Trade fee, in basis points.
    pub trade_fee: u16,
    /// Marketplace contract the instance trades against.
    pub marketplace: Address,
    /// Operator authorized to run raffles.
    pub operator: Address,
}

impl InitParams {
    /// Standard testnet configuration for a new instance.
    ///
    /// The operator is provisionally set to the marketplace address; the
    /// deployment workflow is two-phase, and the real operator is assigned by
    /// a separate administrative transaction after deployment.
    pub fn testnet_defaults(marketplace: Address) -> Self {
        Self {
            pot_limit: U256::from(DEFAULT_POT_LIMIT_WEI),
            raffle_ticket_cost: U256::from(DEFAULT_RAFFLE_TICKET_COST_WEI),
            claim_window: DEFAULT_CLAIM_WINDOW,
            number_of_winners: DEFAULT_NUMBER_OF_WINNERS,
            fee: DEFAULT_FEE,
            trade_fee: DEFAULT_TRADE_FEE_BPS,
            marketplace,
            operator: marketplace,
        }
    }
}

impl From<&InitParams> for InitializeParams {
    fn from(params: &InitParams) -> Self {
        InitializeParams {
            potLimit: params.pot_limit,
            raffleTicketCost: params.raffle_ticket_cost,
            claimWindow: params.claim_window,
            numberOfWinners: params.number_of_winners,
            fee: params.fee,
            tradeFee: params.trade_fee,
            marketplace: params.marketplace,
            operator: params.operator,
        }
    }
}
