use cosmwasm_std::Uint128;

use matchbox_base::{error::ContractError, utils::has_unique_elements};
use matchbox_msg::gauge::types::VoteAllocationItem;

pub fn calc_used_voting_power(vote_allocation: &[VoteAllocationItem]) -> Uint128 {
    vote_allocation
        .iter()
        .fold(Uint128::zero(), |acc, cur| acc + cur.weight)
}

/// validates a vote form before it's submitted as a transaction
pub fn verify_vote_allocation(
    vote_allocation: &[VoteAllocationItem],
    available_voting_power: Uint128,
) -> Result<(), ContractError> {
    // check weights:
    // 1) empty
    if vote_allocation.is_empty() {
        Err(ContractError::EmptyVotingList)?;
    }

    // 2) duplications
    if !has_unique_elements(vote_allocation.iter().map(|x| x.gauge.to_lowercase())) {
        Err(ContractError::VotingListDuplication)?;
    }

    // 3) out of range
    if vote_allocation.iter().any(|x| x.weight.is_zero()) {
        Err(ContractError::WeightIsOutOfRange)?;
    }

    // 4) wrong sum
    if calc_used_voting_power(vote_allocation) > available_voting_power {
        Err(ContractError::ExceedingVotingPower)?;
    }

    Ok(())
}
