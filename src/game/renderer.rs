//! Rendering seam between the session and whatever draws the board

use crate::core::{Verdict, Word};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Secret guessed on the given (1-based) attempt
    Won { guesses: usize },
    Lost,
}

/// Display updates requested by a [`Session`](super::Session)
///
/// The session never draws anything itself; it only calls these.
pub trait Renderer {
    fn set_tile_content(&mut self, row: usize, col: usize, letter: Option<char>);

    fn set_tile_filled(&mut self, row: usize, col: usize, filled: bool);

    fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict);

    fn announce_outcome(&mut self, outcome: Outcome, secret: &Word);
}

/// Renderer that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_tile_content(&mut self, _row: usize, _col: usize, _letter: Option<char>) {}

    fn set_tile_filled(&mut self, _row: usize, _col: usize, _filled: bool) {}

    fn set_tile_verdict(&mut self, _row: usize, _col: usize, _verdict: Verdict) {}

    fn announce_outcome(&mut self, _outcome: Outcome, _secret: &Word) {}
}
