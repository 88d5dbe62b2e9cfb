use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

use matchbox_base::converters::str_to_dec;

use crate::gauge::state::MEZO_USD_PLACEHOLDER;

/// a time-locked veBTC or veMEZO deposit that grants voting power
#[cw_serde]
#[derive(Default)]
pub struct LockPosition {
    pub token_id: Uint128,
    pub amount: Uint128,
    /// unlock date, ignored for permanent locks
    pub end: u64,
    pub is_permanent: bool,
    /// 1e18 scaled multiplier, >= 1x
    pub boost: Uint128,
    pub voting_power: Uint128,
}

impl LockPosition {
    pub fn is_expired(&self, block_time: u64) -> bool {
        !self.is_permanent && self.end <= block_time
    }
}

#[cw_serde]
pub struct GaugeInfo {
    pub address: String,
    /// veBTC lock linked 1:1 to this gauge via the beneficiary lookup
    pub ve_btc_token_id: Uint128,
    /// sum of veMEZO votes committed to this gauge
    pub total_weight: Uint128,
    /// voting power of the linked veBTC lock
    pub ve_btc_weight: Uint128,
    pub is_alive: bool,
    pub boost_multiplier: Decimal,
}

/// a veMEZO holder's committed vote weight toward one gauge for the current epoch
#[cw_serde]
#[derive(Default)]
pub struct VoteAllocationItem {
    pub gauge: String,
    pub weight: Uint128,
}

impl VoteAllocationItem {
    pub fn new(gauge: impl ToString, weight: u128) -> Self {
        Self {
            gauge: gauge.to_string(),
            weight: Uint128::new(weight),
        }
    }
}

#[cw_serde]
pub struct RewardTokenInfo {
    pub token: String,
    pub symbol: String,
    pub decimals: u32,
}

impl RewardTokenInfo {
    pub fn new(token: impl ToString, symbol: impl ToString, decimals: u32) -> Self {
        Self {
            token: token.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }
}

#[cw_serde]
pub struct RewardEntry {
    pub info: RewardTokenInfo,
    pub earned: Uint128,
}

impl RewardEntry {
    pub fn new(info: &RewardTokenInfo, earned: u128) -> Self {
        Self {
            info: info.to_owned(),
            earned: Uint128::new(earned),
        }
    }
}

/// claimable rewards of a single lock from a single bribe source
#[cw_serde]
pub struct RewardClaimItem {
    pub token_id: Uint128,
    pub bribe: String,
    pub rewards: Vec<RewardEntry>,
}

impl RewardClaimItem {
    pub fn new(token_id: u128, bribe: impl ToString, rewards: &[RewardEntry]) -> Self {
        Self {
            token_id: Uint128::new(token_id),
            bribe: bribe.to_string(),
            rewards: rewards.to_owned(),
        }
    }
}

#[cw_serde]
pub struct AggregatedReward {
    pub symbol: String,
    pub decimals: u32,
    pub amount: Uint128,
}

/// two-tier price table: fixed quote for the governance token,
/// BTC quote for every other reward token on the L2
#[cw_serde]
pub struct RewardPricing {
    pub mezo_token: String,
    pub mezo_price_usd: Decimal,
    /// nullable while the oracle is unavailable
    pub btc_price_usd: Option<Decimal>,
}

impl RewardPricing {
    pub fn new(
        mezo_token: impl ToString,
        mezo_price_usd: Decimal,
        btc_price_usd: Option<Decimal>,
    ) -> Self {
        Self {
            mezo_token: mezo_token.to_string(),
            mezo_price_usd,
            btc_price_usd,
        }
    }

    pub fn with_placeholder_mezo_price(
        mezo_token: impl ToString,
        btc_price_usd: Option<Decimal>,
    ) -> Self {
        Self::new(mezo_token, str_to_dec(MEZO_USD_PLACEHOLDER), btc_price_usd)
    }

    /// an absent BTC quote prices the token at zero instead of failing the valuation
    pub fn price_of(&self, token: &str) -> Decimal {
        if token.eq_ignore_ascii_case(&self.mezo_token) {
            self.mezo_price_usd
        } else {
            self.btc_price_usd.unwrap_or_default()
        }
    }
}

/// prospective vote over one gauge used for upcoming epoch APY projection
#[cw_serde]
pub struct ProspectiveVoteItem {
    pub gauge: String,
    pub user_weight: Uint128,
    /// gauge total including the prospective user weight
    pub gauge_total_weight: Uint128,
    pub incentives_usd: Decimal,
}

#[cw_serde]
pub struct EpochInfo {
    pub id: u16,
    pub start_date: u64,
}

/// cosmetic per-gauge metadata from the profile store
#[cw_serde]
#[derive(Default)]
pub struct GaugeProfile {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// composed dashboard row for a single gauge
#[cw_serde]
pub struct GaugeOverview {
    pub gauge: GaugeInfo,
    pub profile: Option<GaugeProfile>,
    pub incentives_usd: Decimal,
    pub apy: Option<Decimal>,
    pub optimal_additional_ve_mezo: Option<Uint128>,
}
