//! Guess evaluation and feedback representation
//!
//! Feedback is one [`Verdict`] per guess position:
//! - `Correct` = right letter, right position
//! - `Present` = letter is in the secret, wrong position
//! - `Absent`  = letter not in the secret, or every instance already consumed

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Per-letter feedback classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Evaluate a guess against the secret, letter by letter
///
/// Each secret letter is consumed by at most one guess letter, and exact
/// position matches are resolved before misplaced ones.
///
/// # Panics
/// Panics if either slice is not exactly 5 letters long.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, evaluate};
///
/// let verdicts = evaluate(b"ERASE", b"SPEED");
/// assert_eq!(verdicts[0], Verdict::Present);
/// assert_eq!(verdicts[1], Verdict::Absent);
/// ```
#[must_use]
pub fn evaluate(guess: &[u8], secret: &[u8]) -> [Verdict; WORD_LENGTH] {
    assert_eq!(guess.len(), WORD_LENGTH, "guess must be {WORD_LENGTH} letters");
    assert_eq!(secret.len(), WORD_LENGTH, "secret must be {WORD_LENGTH} letters");

    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut used = [false; WORD_LENGTH];

    // First pass: exact matches claim their secret position
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            verdicts[i] = Verdict::Correct;
            used[i] = true;
        }
    }

    // Second pass: leftover letters take the first unused match, if any
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let found = (0..WORD_LENGTH).find(|&j| !used[j] && secret[j] == guess[i]);
        if let Some(j) = found {
            verdicts[i] = Verdict::Present;
            used[j] = true;
        }
    }

    verdicts
}

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let secret = Word::new("words").unwrap();
    /// assert!(Feedback::calculate(&secret, &secret).is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self(evaluate(guess.letters(), secret.letters()))
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
