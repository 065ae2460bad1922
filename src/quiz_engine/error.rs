use thiserror::Error;

/// Everything that can go wrong while building or driving a quiz session.
#[derive(Error, Debug)]
pub enum QuizError {
    /// The pool must hold strictly more distinct items than there are choices,
    /// otherwise no replacement can ever be drawn.
    #[error("insufficient pool: {available} distinct items for a round of {round_size}")]
    InsufficientPool { available: usize, round_size: usize },

    #[error("round size must be at least 1")]
    InvalidRoundSize,

    /// Caller bug, never scored as a mistake.
    #[error("choice {index} is out of range for a round of {round_size}")]
    ChoiceOutOfRange { index: usize, round_size: usize },

    #[error("session already ended")]
    SessionEnded,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
