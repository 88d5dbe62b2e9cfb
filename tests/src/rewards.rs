use cosmwasm_std::{StdResult, Uint128};
use pretty_assertions::assert_eq;

use gauge_economics::rewards::{aggregate_rewards, calc_claimable_usd, calc_rewards_usd};
use matchbox_base::converters::str_to_dec;
use matchbox_msg::gauge::{
    state::{MEZO_MAINNET, VOTING_POWER_SCALE},
    types::{RewardClaimItem, RewardEntry, RewardPricing, RewardTokenInfo},
};

const ONE: u128 = VOTING_POWER_SCALE;
const MUSD: &str = "0xdd00000000000000000000000000000000000001";
const TBTC: &str = "0xdd00000000000000000000000000000000000002";

#[test]
fn rewards_are_merged_across_bribe_sources() -> StdResult<()> {
    let musd = RewardTokenInfo::new(MUSD, "mUSD", 18);
    let tbtc = RewardTokenInfo::new(TBTC, "tBTC", 18);

    let claims = vec![
        RewardClaimItem::new(1, "0xbb00000000000000000000000000000000000001", &[
            RewardEntry::new(&musd, 50),
        ]),
        RewardClaimItem::new(1, "0xbb00000000000000000000000000000000000002", &[
            RewardEntry::new(&musd, 30),
            RewardEntry::new(&tbtc, 10),
        ]),
    ];

    let aggregated = aggregate_rewards(&claims);

    assert_eq!(aggregated.len(), 2);
    assert_eq!(aggregated[MUSD].amount, Uint128::new(80));
    assert_eq!(aggregated[MUSD].symbol, "mUSD");
    assert_eq!(aggregated[TBTC].amount, Uint128::new(10));

    Ok(())
}

#[test]
fn token_addresses_are_matched_case_insensitively() -> StdResult<()> {
    let lower = RewardTokenInfo::new(TBTC, "tBTC", 18);
    let upper = RewardTokenInfo::new(TBTC.to_uppercase(), "tBTC", 18);

    let claims = vec![
        RewardClaimItem::new(7, "0xbb00000000000000000000000000000000000001", &[
            RewardEntry::new(&lower, 25),
        ]),
        RewardClaimItem::new(7, "0xbb00000000000000000000000000000000000002", &[
            RewardEntry::new(&upper, 75),
        ]),
    ];

    let aggregated = aggregate_rewards(&claims);

    assert_eq!(aggregated.len(), 1);
    assert_eq!(aggregated[TBTC].amount, Uint128::new(100));

    Ok(())
}

#[test]
fn rewards_usd_uses_two_tier_pricing() -> StdResult<()> {
    let pricing =
        RewardPricing::with_placeholder_mezo_price(MEZO_MAINNET, Some(str_to_dec("100000")));

    // case of the on-chain address doesn't matter for the governance token either
    let mezo = RewardTokenInfo::new(MEZO_MAINNET.to_uppercase(), "MEZO", 18);
    let tbtc = RewardTokenInfo::new(TBTC, "tBTC", 18);

    let claims = vec![RewardClaimItem::new(
        3,
        "0xbb00000000000000000000000000000000000001",
        &[
            // 100 MEZO at the 0.22 $ placeholder = 22 $
            RewardEntry::new(&mezo, 100 * ONE),
            // 0.5 tBTC at 100_000 $ = 50_000 $
            RewardEntry::new(&tbtc, ONE / 2),
        ],
    )];

    assert_eq!(calc_claimable_usd(&claims, &pricing), str_to_dec("50022"));

    Ok(())
}

#[test]
fn absent_btc_quote_contributes_zero() -> StdResult<()> {
    let pricing = RewardPricing::with_placeholder_mezo_price(MEZO_MAINNET, None);

    let mezo = RewardTokenInfo::new(MEZO_MAINNET, "MEZO", 18);
    let tbtc = RewardTokenInfo::new(TBTC, "tBTC", 18);

    let claims = vec![RewardClaimItem::new(
        3,
        "0xbb00000000000000000000000000000000000001",
        &[
            RewardEntry::new(&mezo, 100 * ONE),
            RewardEntry::new(&tbtc, 5 * ONE),
        ],
    )];

    let aggregated = aggregate_rewards(&claims);

    // the unpriced token is still aggregated, it's just worth nothing yet
    assert_eq!(aggregated.len(), 2);
    assert_eq!(calc_rewards_usd(&aggregated, &pricing), str_to_dec("22"));

    Ok(())
}
