use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use itertools::Itertools;

use matchbox_base::error::ContractError;
use matchbox_msg::gauge::types::{GaugeInfo, GaugeOverview, GaugeProfile, RewardClaimItem, RewardPricing};

use crate::{
    math::{calc_gauge_apy, calc_optimal_additional_ve_mezo},
    rewards::calc_claimable_usd,
};

/// per-gauge inputs collected by the data layer
#[cw_serde]
pub struct GaugeData {
    pub gauge: GaugeInfo,
    pub profile: Option<GaugeProfile>,
    /// current epoch bribes deposited for this gauge
    pub claims: Vec<RewardClaimItem>,
}

pub fn build_gauge_overview(
    gauge_data: &GaugeData,
    pricing: &RewardPricing,
    ve_mezo_total_voting_power: Uint128,
    ve_btc_total_voting_power: Uint128,
) -> Result<GaugeOverview, ContractError> {
    let GaugeData {
        gauge,
        profile,
        claims,
    } = gauge_data;

    let incentives_usd = calc_claimable_usd(claims, pricing);
    let apy = calc_gauge_apy(incentives_usd, gauge.total_weight, pricing.mezo_price_usd);
    let optimal_additional_ve_mezo = calc_optimal_additional_ve_mezo(
        gauge.ve_btc_weight,
        ve_mezo_total_voting_power,
        ve_btc_total_voting_power,
    )?;

    Ok(GaugeOverview {
        gauge: gauge.to_owned(),
        profile: profile.to_owned(),
        incentives_usd,
        apy,
        optimal_additional_ve_mezo,
    })
}

/// dashboard list: dead gauges are dropped, richest incentive pools first
pub fn build_gauge_list(
    gauge_data_list: &[GaugeData],
    pricing: &RewardPricing,
    ve_mezo_total_voting_power: Uint128,
    ve_btc_total_voting_power: Uint128,
) -> Result<Vec<GaugeOverview>, ContractError> {
    let overview_list: Vec<GaugeOverview> = gauge_data_list
        .iter()
        .filter(|x| x.gauge.is_alive)
        .map(|x| {
            build_gauge_overview(
                x,
                pricing,
                ve_mezo_total_voting_power,
                ve_btc_total_voting_power,
            )
        })
        .collect::<Result<Vec<GaugeOverview>, ContractError>>()?;

    Ok(overview_list
        .into_iter()
        .sorted_by(|a, b| b.incentives_usd.cmp(&a.incentives_usd))
        .collect())
}
