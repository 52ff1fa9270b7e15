use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Location ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Card at ({row}, {col}) has already been taken")]
    AlreadyClaimed { row: usize, col: usize },
    #[error("Second pick must differ from the first pick")]
    SameAsFirstPick,
    #[error("Operation not allowed while {phase}")]
    InvalidPhase { phase: &'static str },
    #[error("Game is already over")]
    GameOver,
    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),
}
