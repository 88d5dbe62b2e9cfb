use cosmwasm_std::{StdResult, Uint128};
use pretty_assertions::assert_eq;

use gauge_economics::voting::{calc_used_voting_power, verify_vote_allocation};
use matchbox_base::error::ContractError;
use matchbox_msg::gauge::types::{LockPosition, VoteAllocationItem};

const GAUGE_1: &str = "0xcc00000000000000000000000000000000000001";
const GAUGE_2: &str = "0xcc00000000000000000000000000000000000002";

#[test]
fn used_voting_power_is_the_weight_sum() -> StdResult<()> {
    let vote_allocation = vec![
        VoteAllocationItem::new(GAUGE_1, 150),
        VoteAllocationItem::new(GAUGE_2, 350),
    ];

    assert_eq!(calc_used_voting_power(&vote_allocation), Uint128::new(500));
    assert_eq!(calc_used_voting_power(&[]), Uint128::zero());

    Ok(())
}

#[test]
fn permanent_locks_never_expire() -> StdResult<()> {
    let lock = LockPosition {
        token_id: Uint128::new(1),
        amount: Uint128::new(100),
        end: 1_000,
        is_permanent: false,
        boost: Uint128::new(1_000_000_000_000_000_000),
        voting_power: Uint128::new(100),
    };

    assert!(!lock.is_expired(999));
    assert!(lock.is_expired(1_000));

    let permanent = LockPosition {
        is_permanent: true,
        ..lock
    };
    assert!(!permanent.is_expired(u64::MAX));

    Ok(())
}

#[test]
fn vote_allocation_is_verified() -> StdResult<()> {
    let available = Uint128::new(500);

    assert_eq!(
        verify_vote_allocation(&[], available),
        Err(ContractError::EmptyVotingList)
    );

    // same gauge written in different case is still a duplicate
    assert_eq!(
        verify_vote_allocation(
            &[
                VoteAllocationItem::new(GAUGE_1, 100),
                VoteAllocationItem::new(GAUGE_1.to_uppercase(), 100),
            ],
            available
        ),
        Err(ContractError::VotingListDuplication)
    );

    assert_eq!(
        verify_vote_allocation(
            &[
                VoteAllocationItem::new(GAUGE_1, 100),
                VoteAllocationItem::new(GAUGE_2, 0),
            ],
            available
        ),
        Err(ContractError::WeightIsOutOfRange)
    );

    assert_eq!(
        verify_vote_allocation(
            &[
                VoteAllocationItem::new(GAUGE_1, 400),
                VoteAllocationItem::new(GAUGE_2, 101),
            ],
            available
        ),
        Err(ContractError::ExceedingVotingPower)
    );

    assert_eq!(
        verify_vote_allocation(
            &[
                VoteAllocationItem::new(GAUGE_1, 400),
                VoteAllocationItem::new(GAUGE_2, 100),
            ],
            available
        ),
        Ok(())
    );

    Ok(())
}
