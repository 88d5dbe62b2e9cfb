use std::collections::BTreeMap;

use cosmwasm_std::{Decimal, Uint128};
use itertools::Itertools;

use matchbox_base::converters::amount_to_dec;
use matchbox_msg::gauge::types::{AggregatedReward, RewardClaimItem, RewardPricing};

/// merges claimable rewards from multiple bribe sources into a single list
/// keyed by lowercased token address
pub fn aggregate_rewards(claims: &[RewardClaimItem]) -> BTreeMap<String, AggregatedReward> {
    claims
        .iter()
        .flat_map(|claim| &claim.rewards)
        .into_group_map_by(|entry| entry.info.token.to_lowercase())
        .into_iter()
        .map(|(token, entries)| {
            let amount = entries
                .iter()
                .fold(Uint128::zero(), |acc, cur| acc + cur.earned);
            // duplicated entries of one token always carry the same metadata
            let info = &entries[0].info;

            (
                token,
                AggregatedReward {
                    symbol: info.symbol.to_string(),
                    decimals: info.decimals,
                    amount,
                },
            )
        })
        .collect()
}

/// total_usd = sum_over_tokens(amount / 10^decimals * price)     \
/// unpriced tokens and out of range decimals contribute zero instead of
/// failing the whole valuation
pub fn calc_rewards_usd(
    aggregated_rewards: &BTreeMap<String, AggregatedReward>,
    pricing: &RewardPricing,
) -> Decimal {
    aggregated_rewards
        .iter()
        .fold(Decimal::zero(), |acc, (token, reward)| {
            let price = pricing.price_of(token);

            if price.is_zero() {
                return acc;
            }

            match amount_to_dec(reward.amount, reward.decimals) {
                Ok(amount) => acc + amount * price,
                Err(_) => acc,
            }
        })
}

pub fn calc_claimable_usd(claims: &[RewardClaimItem], pricing: &RewardPricing) -> Decimal {
    calc_rewards_usd(&aggregate_rewards(claims), pricing)
}
