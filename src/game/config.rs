//! Session configuration

use crate::core::{Word, WordError};
use thiserror::Error;

/// Secret word used when none is configured
pub const DEFAULT_SECRET: &str = "WORDS";

/// Number of guesses allowed per game
pub const DEFAULT_MAX_ROWS: usize = 5;

/// Largest row limit a session accepts
pub const MAX_ROWS: usize = 26;

/// Error building a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("A game needs at least one row")]
    ZeroRows,
    #[error("At most {MAX_ROWS} rows are supported, got {0}")]
    TooManyRows(usize),
}

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    secret: Word,
    max_rows: usize,
}

impl GameConfig {
    /// Build a config from a secret word and row limit
    ///
    /// # Errors
    /// Returns `ConfigError` if the secret is not a valid 5-letter word or
    /// `max_rows` is outside `1..=MAX_ROWS`.
    pub fn new(secret: &str, max_rows: usize) -> Result<Self, ConfigError> {
        if max_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if max_rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows(max_rows));
        }
        Ok(Self {
            secret: Word::new(secret)?,
            max_rows,
        })
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret: Word::new(DEFAULT_SECRET).expect("default secret is a valid word"),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}
