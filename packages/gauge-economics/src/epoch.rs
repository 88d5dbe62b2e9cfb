use matchbox_base::error::ContractError;
use matchbox_msg::gauge::{
    state::{EPOCH_LENGTH, GENESIS_EPOCH_START_DATE, VOTE_WINDOW_BUFFER},
    types::EpochInfo,
};

pub fn calc_epoch_start(block_time: u64) -> u64 {
    block_time / EPOCH_LENGTH * EPOCH_LENGTH
}

pub fn calc_epoch_next(block_time: u64) -> u64 {
    calc_epoch_start(block_time) + EPOCH_LENGTH
}

/// epochs are counted from 1 starting at the genesis epoch
pub fn calc_epoch_info(block_time: u64) -> EpochInfo {
    let start_date = calc_epoch_start(block_time);
    let id = (start_date.saturating_sub(GENESIS_EPOCH_START_DATE) / EPOCH_LENGTH + 1) as u16;

    EpochInfo { id, start_date }
}

/// voting is allowed in (epoch_start + buffer, epoch_next - buffer]
pub fn is_in_voting_window(block_time: u64) -> bool {
    let epoch_start = calc_epoch_start(block_time);

    block_time > epoch_start + VOTE_WINDOW_BUFFER
        && block_time <= epoch_start + EPOCH_LENGTH - VOTE_WINDOW_BUFFER
}

pub fn check_voting_window(block_time: u64) -> Result<(), ContractError> {
    if !is_in_voting_window(block_time) {
        Err(ContractError::VotingWindowIsClosed)?;
    }

    Ok(())
}
