use thiserror::Error;

use crate::engine::RoundPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card id: {0} (card ids are non-negative integers)")]
    InvalidCardId(i64),
    #[error("Shoe is empty; reset it before drawing again")]
    EmptyShoe,
    #[error("Invalid decision: '{0}' (expected hit or stand)")]
    InvalidDecision(String),
    #[error("Invalid deck count: {0}, a shoe needs at least one deck")]
    InvalidDeckCount(u16),
    #[error("A round is already in progress ({0:?})")]
    RoundInProgress(RoundPhase),
    #[error("Not allowed during {actual:?} (expected {expected:?})")]
    WrongPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
    #[error("Player hand is already finished")]
    HandFinished,
}
