use cosmwasm_std::{Decimal, Uint128, Uint256};

use matchbox_base::{converters::u128_to_dec, error::ContractError};
use matchbox_msg::gauge::{
    state::{VOTING_POWER_DECIMALS, VOTING_POWER_SCALE},
    types::ProspectiveVoteItem,
};

pub const WEEKS_PER_YEAR: u64 = 52;

fn gcd(mut a: Uint256, mut b: Uint256) -> Uint256 {
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }

    a
}

fn overflow_context(
    gauge_ve_btc_weight: Uint128,
    ve_mezo_total_voting_power: Uint128,
    ve_btc_total_voting_power: Uint128,
) -> ContractError {
    ContractError::ArithmeticOverflow {
        context: format!(
            "gauge_ve_btc_weight: {}, ve_mezo_total_voting_power: {}, ve_btc_total_voting_power: {}",
            gauge_ve_btc_weight, ve_mezo_total_voting_power, ve_btc_total_voting_power
        ),
    }
}

/// optimal_additional_ve_mezo = gauge_ve_btc_weight * ve_mezo_total_voting_power / ve_btc_total_voting_power     \
/// the amount of extra veMEZO votes that would make the gauge's veMEZO share
/// proportional to its veBTC share system-wide
///
/// computed over a GCD-reduced rational so chained intermediate products stay small,
/// result truncates toward zero, zero inputs mean "no recommendation"
pub fn calc_optimal_additional_ve_mezo(
    gauge_ve_btc_weight: Uint128,
    ve_mezo_total_voting_power: Uint128,
    ve_btc_total_voting_power: Uint128,
) -> Result<Option<Uint128>, ContractError> {
    if gauge_ve_btc_weight.is_zero()
        || ve_mezo_total_voting_power.is_zero()
        || ve_btc_total_voting_power.is_zero()
    {
        return Ok(None);
    }

    let overflow =
        || overflow_context(gauge_ve_btc_weight, ve_mezo_total_voting_power, ve_btc_total_voting_power);

    let scale = Uint256::from(VOTING_POWER_SCALE);
    let numerator = Uint256::from(gauge_ve_btc_weight)
        .checked_mul(Uint256::from(ve_mezo_total_voting_power))
        .map_err(|_| overflow())?;
    let denominator = Uint256::from(ve_btc_total_voting_power)
        .checked_mul(scale)
        .map_err(|_| overflow())?;

    let divisor = gcd(numerator, denominator);
    let numerator = numerator / divisor;
    let denominator = denominator / divisor;

    let optimal = numerator.checked_mul(scale).map_err(|_| overflow())? / denominator;

    Uint128::try_from(optimal)
        .map(Some)
        .map_err(|_| overflow())
}

/// position_value_usd = (total_ve_mezo_weight / voting_power_scale) * price_per_ve_mezo     \
/// weekly_return = total_incentives_usd / position_value_usd                                \
/// apy = 100 % * weeks_per_year * weekly_return
///
/// zero weight or zero incentives mean the estimate is undefined
pub fn calc_gauge_apy(
    total_incentives_usd: Decimal,
    total_ve_mezo_weight: Uint128,
    price_per_ve_mezo: Decimal,
) -> Option<Decimal> {
    let position_amount = Decimal::from_atomics(total_ve_mezo_weight, VOTING_POWER_DECIMALS).ok()?;
    let position_value_usd = position_amount.checked_mul(price_per_ve_mezo).ok()?;

    if position_value_usd.is_zero() || total_incentives_usd.is_zero() {
        return None;
    }

    let weekly_return = total_incentives_usd.checked_div(position_value_usd).ok()?;

    weekly_return
        .checked_mul(u128_to_dec(100 * WEEKS_PER_YEAR as u128))
        .ok()
}

/// same formula over the voter's own basis: already used weight and actually claimable value
pub fn calc_voting_apy(
    claimable_usd: Decimal,
    used_ve_mezo_weight: Uint128,
    price_per_ve_mezo: Decimal,
) -> Option<Decimal> {
    calc_gauge_apy(claimable_usd, used_ve_mezo_weight, price_per_ve_mezo)
}

/// upcoming epoch projection for a set of prospective votes:                         \
/// user_share = user_weight / gauge_total_weight                                     \
/// projected_usd = sum_over_gauges(user_share * incentives_usd)                      \
/// apy over the voter's total committed weight
pub fn calc_projected_apy(
    prospective_votes: &[ProspectiveVoteItem],
    price_per_ve_mezo: Decimal,
) -> Option<Decimal> {
    let (projected_usd, total_user_weight) = prospective_votes.iter().try_fold(
        (Decimal::zero(), Uint128::zero()),
        |(usd_acc, weight_acc), cur| {
            let weight_acc = weight_acc.checked_add(cur.user_weight).ok()?;

            if cur.gauge_total_weight.is_zero() || cur.user_weight.is_zero() {
                return Some((usd_acc, weight_acc));
            }

            let user_share =
                Decimal::checked_from_ratio(cur.user_weight, cur.gauge_total_weight).ok()?;
            let gauge_usd = user_share.checked_mul(cur.incentives_usd).ok()?;

            Some((usd_acc.checked_add(gauge_usd).ok()?, weight_acc))
        },
    )?;

    calc_gauge_apy(projected_usd, total_user_weight, price_per_ve_mezo)
}
