use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot check while facing a bet")]
    IllegalCheck,
    #[error("Raise of {amount} is below the minimum of {minimum}")]
    RaiseBelowMinimum { amount: u32, minimum: u32 },
    #[error("Raise of {amount} exceeds the remaining stack of {stack}")]
    BetExceedsStack { amount: u32, stack: u32 },
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Fewer than two players can post chips")]
    InsufficientPlayers,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("The deck ran out of cards")]
    DeckExhausted,
    #[error("Hand evaluation needs at least 5 cards, got {got}")]
    TooFewCards { got: usize },
    #[error("Equity estimation needs at least one trial")]
    InvalidTrialCount,
    #[error("A table seats between 2 and 4 players, got {got}")]
    InvalidSeatCount { got: usize },
    #[error("Hole cards already dealt")]
    HoleCardsFull,
    #[error("Seat {seat} reached showdown with no hole cards")]
    MissingHoleCards { seat: usize },
    #[error("The game is over")]
    GameOver,
}
