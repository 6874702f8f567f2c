use thiserror::Error;

use crate::{CellCount, CellIndex, Money};

/// Why a command was refused. The engine is left untouched whenever one of these is returned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Stake must be positive, got {0}")]
    InvalidStake(Money),
    #[error("Stake {stake} exceeds balance {balance}")]
    InsufficientBalance { stake: Money, balance: Money },
    #[error("Mine count {0} is outside the playable range")]
    InvalidMineCount(CellCount),
    #[error("Sampler dealt {actual} mines but {expected} were requested")]
    LayoutMismatch { expected: CellCount, actual: CellCount },
    #[error("Invalid cell index {0}")]
    InvalidCell(CellIndex),
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("No round is in progress")]
    NotPlaying,
    #[error("Reveal at least one safe cell before cashing out")]
    NothingToCashOut,
}

pub type Result<T> = core::result::Result<T, Rejection>;
