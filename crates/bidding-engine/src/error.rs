use bidding_core::contract::ContractParseError;
use bidding_core::Position;
use thiserror::Error;

/// Failures of an interactive input request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The user asked to quit, or input ended.
    #[error("input cancelled")]
    Cancelled,
    #[error("no valid input after {attempts} attempts (last: {last:?})")]
    Exhausted { attempts: usize, last: String },
}

/// Failure reported by a double-dummy oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("double-dummy oracle failed: {0}")]
pub struct OracleError(pub String);

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no opening bids configured")]
    EmptyBidTree,
    #[error("the auction has not finished")]
    AuctionNotFinished,
    #[error(transparent)]
    InvalidContract(#[from] ContractParseError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{token:?} is not a legal call here")]
    IllegalCall { token: String },
    #[error("it is {0}'s turn, not the user's")]
    NotUsersTurn(Position),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
