//! Simple interactive CLI mode
//!
//! Text-based game without TUI. A line of two or more characters is typed into
//! the board as a whole guess and submitted. A single character types just
//! that letter, an empty line presses Enter, and `undo` deletes a letter, so a
//! row can also be built one key at a time.

use crate::core::{Verdict, WORD_LENGTH, Word};
use crate::game::{
    GameConfig, InputError, KeyInput, Outcome, Renderer, Session, Statistics, dispatch,
};
use crate::output::formatters::colored_tile;
use crate::output::{print_outcome, print_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line of input that is a command rather than a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewGame,
    Stats,
    Undo,
}

impl LineCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Some(Self::Quit),
            "new" | ":new" | ":n" => Some(Self::NewGame),
            "undo" => Some(Self::Undo),
            // Bare "stats" is a guessable word
            ":stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

/// Prints each row once the session has delivered all of its verdicts
#[derive(Debug, Default)]
struct LineRenderer {
    letters: [char; WORD_LENGTH],
    verdicts: [Option<Verdict>; WORD_LENGTH],
    outcome: Option<Outcome>,
}

impl Renderer for LineRenderer {
    fn set_tile_content(&mut self, _row: usize, col: usize, letter: Option<char>) {
        self.letters[col] = letter.unwrap_or(' ');
    }

    fn set_tile_filled(&mut self, _row: usize, _col: usize, _filled: bool) {}

    fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        self.verdicts[col] = Some(verdict);
        if col + 1 == WORD_LENGTH {
            let tiles: String = self
                .letters
                .iter()
                .zip(&self.verdicts)
                .map(|(&letter, &verdict)| colored_tile(letter, verdict).to_string())
                .collect();
            println!("  {}. {tiles}", (row + 1).to_string().bright_black());
            self.verdicts = [None; WORD_LENGTH];
        }
    }

    fn announce_outcome(&mut self, outcome: Outcome, _secret: &Word) {
        self.outcome = Some(outcome);
    }
}

/// Send one key, returning its rejection if any
fn press<R>(session: &mut Session, renderer: &mut R, key: KeyInput) -> Option<InputError>
where
    R: Renderer + ?Sized,
{
    dispatch(session, renderer, key).and_then(Result::err)
}

fn clear_row<R>(session: &mut Session, renderer: &mut R)
where
    R: Renderer + ?Sized,
{
    while let Some(Ok(_)) = dispatch(session, renderer, KeyInput::Backspace) {}
}

/// Play one line of input against the active row
///
/// An empty line presses Enter and a single character types only that letter.
/// Longer lines replace the row with the whole line and press Enter; if
/// anything was rejected the row is cleared again. Returns every rejection in
/// order.
fn play_line<R>(session: &mut Session, renderer: &mut R, line: &str) -> Vec<InputError>
where
    R: Renderer + ?Sized,
{
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return press(session, renderer, KeyInput::Enter).into_iter().collect(),
        (Some(letter), None) => {
            return press(session, renderer, KeyInput::Letter(letter))
                .into_iter()
                .collect();
        }
        _ => {}
    }

    clear_row(session, renderer);
    let mut errors: Vec<InputError> = line
        .chars()
        .map(KeyInput::Letter)
        .chain(std::iter::once(KeyInput::Enter))
        .filter_map(|key| dispatch(session, renderer, key))
        .filter_map(Result::err)
        .collect();

    if !errors.is_empty() {
        clear_row(session, renderer);
    }
    errors.dedup();
    errors
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║          Wordle - Interactive Mode           ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {WORD_LENGTH}-letter word in {} tries. Type a guess and press Enter.",
        config.max_rows()
    );
    println!("Single letters are typed one at a time; an empty line submits the row.");
    println!(
        "Commands: 'quit' to exit, 'new' for a new game, 'undo' to delete a letter, ':stats' for statistics\n"
    );

    let mut stats = Statistics::default();

    'games: loop {
        let mut session = Session::new(config.clone());
        let mut renderer = LineRenderer::default();

        while !session.is_over() {
            let prompt = format!("Guess {}", session.cursor().row + 1);
            let Some(line) = get_user_input(&prompt)? else {
                break 'games;
            };

            match LineCommand::parse(&line) {
                Some(LineCommand::Quit) => break 'games,
                Some(LineCommand::NewGame) => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                Some(LineCommand::Stats) => {
                    print_statistics(&stats);
                    continue;
                }
                Some(LineCommand::Undo) => {
                    if let Some(error) = press(&mut session, &mut renderer, KeyInput::Backspace) {
                        println!("{}", format!("❌ {error}").red());
                    }
                    continue;
                }
                None => {}
            }

            for error in play_line(&mut session, &mut renderer, &line) {
                println!("{}", format!("❌ {error}").red());
            }
        }

        if let Some(outcome) = renderer.outcome {
            stats.record(outcome);
            print_outcome(outcome, session.secret(), session.history());
        }

        match get_user_input("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => break,
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::NullRenderer;

    fn session() -> Session {
        Session::new(GameConfig::new("speed", 5).unwrap())
    }

    #[test]
    fn commands_parse() {
        assert_eq!(LineCommand::parse("QUIT"), Some(LineCommand::Quit));
        assert_eq!(LineCommand::parse(":new"), Some(LineCommand::NewGame));
        assert_eq!(LineCommand::parse("new"), Some(LineCommand::NewGame));
        assert_eq!(LineCommand::parse("Undo"), Some(LineCommand::Undo));
        assert_eq!(LineCommand::parse(":stats"), Some(LineCommand::Stats));
        assert_eq!(LineCommand::parse("stats"), None);
        assert_eq!(LineCommand::parse("erase"), None);
    }

    #[test]
    fn full_line_submits_a_guess() {
        let mut s = session();
        let errors = play_line(&mut s, &mut NullRenderer, "erase");

        assert!(errors.is_empty());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.cursor().row, 1);
    }

    #[test]
    fn short_line_reports_and_clears_row() {
        let mut s = session();
        let errors = play_line(&mut s, &mut NullRenderer, "era");

        assert_eq!(errors, vec![InputError::RowIncomplete { filled: 3 }]);
        assert_eq!(s.cursor().column, 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn long_line_reports_row_full_once() {
        let mut s = session();
        let errors = play_line(&mut s, &mut NullRenderer, "erases");

        // Extra letter is rejected but the first five are still submitted
        assert_eq!(errors, vec![InputError::RowFull]);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.cursor().column, 0);
    }

    #[test]
    fn invalid_characters_are_reported() {
        let mut s = session();
        let errors = play_line(&mut s, &mut NullRenderer, "sp3ed");

        assert_eq!(
            errors,
            vec![
                InputError::InvalidLetter('3'),
                InputError::RowIncomplete { filled: 4 }
            ]
        );
        assert_eq!(s.cursor().column, 0);
    }

    #[test]
    fn single_letter_is_typed_without_submitting() {
        let mut s = session();
        let errors = play_line(&mut s, &mut NullRenderer, "e");

        assert!(errors.is_empty());
        assert_eq!(s.cursor().column, 1);
        assert_eq!(s.current_word(), "E");
        assert!(s.history().is_empty());
    }

    #[test]
    fn row_can_be_built_one_letter_per_line() {
        let mut s = session();
        for line in ["s", "p", "e", "e", "d"] {
            assert!(play_line(&mut s, &mut NullRenderer, line).is_empty());
        }
        assert!(s.history().is_empty());

        assert!(play_line(&mut s, &mut NullRenderer, "").is_empty());
        assert!(s.is_over());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn empty_line_on_partial_row_keeps_letters() {
        let mut s = session();
        play_line(&mut s, &mut NullRenderer, "s");

        let errors = play_line(&mut s, &mut NullRenderer, "");
        assert_eq!(errors, vec![InputError::RowIncomplete { filled: 1 }]);
        assert_eq!(s.cursor().column, 1);
    }

    #[test]
    fn undo_deletes_last_letter() {
        let mut s = session();
        play_line(&mut s, &mut NullRenderer, "e");

        assert_eq!(press(&mut s, &mut NullRenderer, KeyInput::Backspace), None);
        assert_eq!(s.cursor().column, 0);
        assert_eq!(
            press(&mut s, &mut NullRenderer, KeyInput::Backspace),
            Some(InputError::NothingToDelete)
        );
    }

    #[test]
    fn whole_guess_replaces_partial_row() {
        let mut s = session();
        play_line(&mut s, &mut NullRenderer, "s");

        assert!(play_line(&mut s, &mut NullRenderer, "erase").is_empty());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].guess.text(), "ERASE");
    }

    #[test]
    fn line_renderer_captures_outcome() {
        let mut s = session();
        let mut renderer = LineRenderer::default();
        play_line(&mut s, &mut renderer, "speed");

        assert_eq!(renderer.outcome, Some(Outcome::Won { guesses: 1 }));
        assert!(play_line(&mut s, &mut renderer, "erase").is_empty());
        assert_eq!(s.history().len(), 1);
    }
}
