use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Guess must be exactly one letter")]
    InvalidInput,
    #[error("Letter was already guessed")]
    DuplicateGuess,
    #[error("Game already finished, no new guesses are accepted")]
    AlreadyFinished,
    #[error("Secret word must be non-empty and contain only letters")]
    InvalidWord,
    #[error("Word source has no usable words")]
    EmptyCorpus,
}

impl GameError {
    /// Whether the error came from a rejected guess, as opposed to game setup.
    pub const fn is_guess_rejection(self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::DuplicateGuess | Self::AlreadyFinished
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
