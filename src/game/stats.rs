//! Win/loss tracking across games

use super::renderer::Outcome;

/// Results of every finished game in this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` = games won in exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    pub fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if let Outcome::Won { guesses } = outcome {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
