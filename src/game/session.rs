//! Input state machine for a single game

use super::config::GameConfig;
use super::error::InputError;
use super::renderer::{Outcome, Renderer};
use crate::core::{Feedback, WORD_LENGTH, Word};

/// Position of the next tile to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Active guess attempt, `0..=max_rows`
    pub row: usize,
    /// Next empty slot in the active row, `0..=WORD_LENGTH`
    pub column: usize,
}

/// A guess that has been evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One game in progress
///
/// Owns the secret (through its config), the cursor, the active row's tiles
/// and the game-over state. Every mutation goes through [`add_letter`],
/// [`delete_letter`] or [`submit_guess`], which validate before touching state.
///
/// [`add_letter`]: Session::add_letter
/// [`delete_letter`]: Session::delete_letter
/// [`submit_guess`]: Session::submit_guess
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    cursor: Cursor,
    tiles: [Option<u8>; WORD_LENGTH],
    history: Vec<SubmittedRow>,
    outcome: Option<Outcome>,
}

impl Session {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        tracing::debug!(max_rows = config.max_rows(), "session created");
        Self {
            config,
            cursor: Cursor::default(),
            tiles: [None; WORD_LENGTH],
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Type a letter into the next empty tile of the active row
    ///
    /// Lowercase letters are accepted and stored uppercase.
    ///
    /// # Errors
    /// - `GameOver` once the game has ended
    /// - `InvalidLetter` for anything that is not an ASCII letter
    /// - `RowFull` when all five tiles are already filled
    pub fn add_letter<R>(&mut self, letter: char, renderer: &mut R) -> Result<(), InputError>
    where
        R: Renderer + ?Sized,
    {
        self.ensure_active()?;
        if !letter.is_ascii_alphabetic() {
            return Err(self.reject(InputError::InvalidLetter(letter)));
        }
        if self.cursor.column >= WORD_LENGTH {
            return Err(self.reject(InputError::RowFull));
        }

        let letter = letter.to_ascii_uppercase();
        let Cursor { row, column } = self.cursor;
        self.tiles[column] = Some(letter as u8);
        renderer.set_tile_content(row, column, Some(letter));
        renderer.set_tile_filled(row, column, true);
        self.cursor.column += 1;

        tracing::debug!(
            %letter,
            position = column,
            current_word = %self.current_word(),
            "letter added"
        );
        Ok(())
    }

    /// Clear the most recently filled tile of the active row
    ///
    /// # Errors
    /// - `GameOver` once the game has ended
    /// - `NothingToDelete` when the row is empty
    pub fn delete_letter<R>(&mut self, renderer: &mut R) -> Result<(), InputError>
    where
        R: Renderer + ?Sized,
    {
        self.ensure_active()?;
        if self.cursor.column == 0 {
            return Err(self.reject(InputError::NothingToDelete));
        }

        self.cursor.column -= 1;
        let Cursor { row, column } = self.cursor;
        self.tiles[column] = None;
        renderer.set_tile_content(row, column, None);
        renderer.set_tile_filled(row, column, false);

        tracing::debug!(position = column, "letter deleted");
        Ok(())
    }

    /// Evaluate the active row against the secret
    ///
    /// On success the verdicts are pushed to the renderer, and the session
    /// either ends (win, or last row used) or moves to the next row.
    ///
    /// # Errors
    /// - `GameOver` once the game has ended
    /// - `RowIncomplete` when fewer than five tiles are filled
    pub fn submit_guess<R>(&mut self, renderer: &mut R) -> Result<Feedback, InputError>
    where
        R: Renderer + ?Sized,
    {
        self.ensure_active()?;
        let Some(guess) = self.assembled_guess() else {
            return Err(self.reject(InputError::RowIncomplete {
                filled: self.cursor.column,
            }));
        };

        let row = self.cursor.row;
        let feedback = Feedback::calculate(&guess, self.config.secret());
        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            renderer.set_tile_verdict(row, col, verdict);
        }
        self.history.push(SubmittedRow { guess, feedback });
        tracing::info!(row, %guess, %feedback, "guess submitted");

        if feedback.is_perfect() {
            self.finish(Outcome::Won { guesses: row + 1 }, renderer);
            return Ok(feedback);
        }

        self.cursor.row += 1;
        self.cursor.column = 0;
        self.tiles = [None; WORD_LENGTH];

        if self.cursor.row >= self.config.max_rows() {
            self.finish(Outcome::Lost, renderer);
        }

        Ok(feedback)
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn current_word(&self) -> String {
        self.tiles
            .iter()
            .map_while(|tile| tile.map(char::from))
            .collect()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        self.config.secret()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Rows submitted so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[SubmittedRow] {
        &self.history
    }

    fn ensure_active(&self) -> Result<(), InputError> {
        if self.is_over() {
            return Err(InputError::GameOver);
        }
        Ok(())
    }

    fn assembled_guess(&self) -> Option<Word> {
        if self.cursor.column < WORD_LENGTH {
            return None;
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(&self.tiles) {
            *slot = (*tile)?;
        }
        Some(Word::from_uppercase(letters))
    }

    fn reject(&self, error: InputError) -> InputError {
        tracing::debug!(
            row = self.cursor.row,
            column = self.cursor.column,
            %error,
            "input rejected"
        );
        error
    }

    fn finish<R>(&mut self, outcome: Outcome, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        tracing::info!(?outcome, secret = %self.config.secret(), "game over");
        self.outcome = Some(outcome);
        renderer.announce_outcome(outcome, self.config.secret());
    }
}
