//! Core domain types for Wordle
//!
//! Words, verdicts and the guess evaluator. Everything here is pure and has no
//! knowledge of input handling or rendering.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
