//! Rejected input

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Why the session refused an input event
///
/// None of these are fatal. A rejected event leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Letter typed with every tile in the row already filled
    #[error("Row is full")]
    RowFull,

    /// Backspace with no letters in the row
    #[error("No letters to delete")]
    NothingToDelete,

    /// Submit before the row was filled
    #[error("Not enough letters ({filled} of {WORD_LENGTH})")]
    RowIncomplete { filled: usize },

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// Any input after a win or loss
    #[error("Game is over")]
    GameOver,
}
