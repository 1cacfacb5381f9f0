//! One-shot guess evaluation

use crate::core::{Feedback, Word, WordError};
use crate::game::{GameConfig, SubmittedRow};

/// Result of checking one guess against the configured secret
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub row: SubmittedRow,
}

/// Evaluate `guess` against the secret in `config`
///
/// # Errors
///
/// Returns `WordError` if `guess` is not a 5-letter word.
pub fn check_guess(guess: &str, config: &GameConfig) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let feedback = Feedback::calculate(&guess, config.secret());
    tracing::info!(%guess, %feedback, "checked guess");

    Ok(CheckResult {
        row: SubmittedRow { guess, feedback },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_against_secret() {
        let config = GameConfig::new("speed", 5).unwrap();
        let result = check_guess("erase", &config).unwrap();
        assert_eq!(result.row.guess.text(), "ERASE");
        assert_eq!(result.row.feedback.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn check_rejects_bad_guess() {
        let config = GameConfig::default();
        assert_eq!(
            check_guess("toolong", &config).unwrap_err(),
            WordError::InvalidLength(7)
        );
    }
}
