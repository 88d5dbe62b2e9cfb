use cosmwasm_std::StdError;
use thiserror::Error;

impl From<StdError> for ContractError {
    fn from(std_error: StdError) -> Self {
        Self::CustomError {
            val: std_error.to_string(),
        }
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },

    // ------------------------------ math ----------------------------------------
    #[error("Arithmetic overflow! {context:?}")]
    ArithmeticOverflow { context: String },

    // ------------------------------ voting ----------------------------------------
    #[error("Empty voting list!")]
    EmptyVotingList,

    #[error("Voting list has gauge address duplication!")]
    VotingListDuplication,

    #[error("Weight can not be equal zero!")]
    WeightIsOutOfRange,

    #[error("Allocated weight is greater than available voting power!")]
    ExceedingVotingPower,

    #[error("Voting is blocked near the epoch edges, come back later!")]
    VotingWindowIsClosed,
}
