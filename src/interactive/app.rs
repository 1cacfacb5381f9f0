//! TUI application state and logic

use crate::core::{Verdict, WORD_LENGTH, Word};
use crate::game::{
    GameConfig, Handled, InputError, KeyInput, Outcome, Renderer, Session, Statistics, dispatch,
};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;

/// Debug panel keeps only this many entries
pub const DEBUG_LOG_CAPACITY: usize = 20;

/// One tile as currently drawn
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: Option<char>,
    pub filled: bool,
    pub verdict: Option<Verdict>,
}

/// Drawable copy of the board, updated through [`Renderer`]
#[derive(Debug, Clone)]
pub struct BoardView {
    pub rows: Vec<[TileView; WORD_LENGTH]>,
    pub announcement: Option<(Outcome, Word)>,
}

impl BoardView {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![[TileView::default(); WORD_LENGTH]; rows],
            announcement: None,
        }
    }

    fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut TileView> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }
}

impl Renderer for BoardView {
    fn set_tile_content(&mut self, row: usize, col: usize, letter: Option<char>) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.letter = letter;
        }
    }

    fn set_tile_filled(&mut self, row: usize, col: usize, filled: bool) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.filled = filled;
        }
    }

    fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.verdict = Some(verdict);
        }
    }

    fn announce_outcome(&mut self, outcome: Outcome, secret: &Word) {
        self.announcement = Some((outcome, *secret));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct DebugEntry {
    pub time: String,
    pub text: String,
    pub kind: LogKind,
}

/// Newest-first debug messages shown beside the board
#[derive(Debug, Default, Clone)]
pub struct DebugLog {
    entries: VecDeque<DebugEntry>,
}

impl DebugLog {
    pub fn push(&mut self, text: impl Into<String>, kind: LogKind) {
        self.entries.push_front(DebugEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            text: text.into(),
            kind,
        });
        self.entries.truncate(DEBUG_LOG_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &DebugEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Things a key press can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(KeyInput),
    NewGame,
    ClearLog,
    Quit,
}

impl AppAction {
    /// Map a terminal key press to an action; unmapped keys yield `None`
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Self::Quit),
            KeyCode::Char('n') if ctrl => Some(Self::NewGame),
            KeyCode::Char('l') if ctrl => Some(Self::ClearLog),
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => {
                Some(Self::Game(KeyInput::Letter(c.to_ascii_uppercase())))
            }
            KeyCode::Backspace => Some(Self::Game(KeyInput::Backspace)),
            KeyCode::Enter => Some(Self::Game(KeyInput::Enter)),
            _ => None,
        }
    }
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub session: Session,
    pub board: BoardView,
    pub debug_log: DebugLog,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut app = Self {
            board: BoardView::new(config.max_rows()),
            session: Session::new(config.clone()),
            config,
            debug_log: DebugLog::default(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.log_welcome();
        app
    }

    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Game(key) => self.handle_key(key),
            AppAction::NewGame => self.new_game(),
            AppAction::ClearLog => {
                self.debug_log.clear();
                self.debug_log
                    .push("Debug output cleared - ready for new messages", LogKind::Info);
            }
            AppAction::Quit => self.should_quit = true,
        }
    }

    pub fn handle_key(&mut self, key: KeyInput) {
        let Some(result) = dispatch(&mut self.session, &mut self.board, key) else {
            return;
        };

        match result {
            Ok(Handled::Typed) => {
                let word = self.session.current_word();
                self.debug_log.push(
                    format!("Letter added at position {}", word.len() - 1),
                    LogKind::Success,
                );
                self.debug_log
                    .push(format!("Current word: \"{word}\""), LogKind::Info);
            }
            Ok(Handled::Deleted) => {
                self.debug_log.push(
                    format!("Letter deleted at position {}", self.session.cursor().column),
                    LogKind::Info,
                );
            }
            Ok(Handled::Submitted(feedback)) => {
                self.debug_log.push(
                    format!("Guess checked: {}", feedback.to_emoji()),
                    LogKind::Info,
                );
                if let Some(outcome) = self.session.outcome() {
                    self.stats.record(outcome);
                    let kind = match outcome {
                        Outcome::Won { .. } => LogKind::Success,
                        Outcome::Lost => LogKind::Error,
                    };
                    self.debug_log.push(
                        format!("Game over! The word was {}", self.session.secret()),
                        kind,
                    );
                }
            }
            Err(error) => {
                let kind = match error {
                    InputError::RowIncomplete { .. } => LogKind::Info,
                    _ => LogKind::Error,
                };
                self.debug_log.push(error.to_string(), kind);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = Session::new(self.config.clone());
        self.board = BoardView::new(self.config.max_rows());
        self.debug_log.push("New game started!", LogKind::Success);
    }

    fn log_welcome(&mut self) {
        self.debug_log.push("Game initialized successfully!", LogKind::Success);
        self.debug_log.push(
            format!("🎯 Target word: {}", self.session.secret()),
            LogKind::Info,
        );
        self.debug_log
            .push("Try typing letters, pressing Backspace, or Enter", LogKind::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = AppAction::from_key(key) {
                app.apply(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(secret: &str) -> App {
        App::new(GameConfig::new(secret, 5).unwrap())
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyInput::Letter(c));
        }
    }

    #[test]
    fn key_mapping() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            AppAction::from_key(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(AppAction::Game(KeyInput::Letter('A')))
        );
        assert_eq!(
            AppAction::from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::Quit)
        );
        assert_eq!(
            AppAction::from_key(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(AppAction::NewGame)
        );
        assert_eq!(
            AppAction::from_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppAction::Game(KeyInput::Enter))
        );
        assert_eq!(
            AppAction::from_key(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn typing_updates_board_view() {
        let mut app = app("WORDS");
        type_keys(&mut app, "he");

        let row = &app.board.rows[0];
        assert_eq!(row[0].letter, Some('H'));
        assert!(row[1].filled);
        assert_eq!(row[2], TileView::default());
    }

    #[test]
    fn submitted_row_gets_verdicts() {
        let mut app = app("SPEED");
        type_keys(&mut app, "ERASE");
        app.handle_key(KeyInput::Enter);

        let verdicts: Vec<_> = app.board.rows[0].iter().map(|t| t.verdict).collect();
        assert_eq!(
            verdicts,
            vec![
                Some(Verdict::Present),
                Some(Verdict::Absent),
                Some(Verdict::Absent),
                Some(Verdict::Present),
                Some(Verdict::Present),
            ]
        );
        assert_eq!(app.session.cursor().row, 1);
    }

    #[test]
    fn win_records_stats_and_announces() {
        let mut app = app("WORDS");
        type_keys(&mut app, "WORDS");
        app.handle_key(KeyInput::Enter);

        assert_eq!(app.stats.games_won, 1);
        let (outcome, secret) = app.board.announcement.unwrap();
        assert_eq!(outcome, Outcome::Won { guesses: 1 });
        assert_eq!(secret.text(), "WORDS");

        // Ignored once the game is over
        let logged = app.debug_log.len();
        app.handle_key(KeyInput::Letter('A'));
        assert_eq!(app.debug_log.len(), logged);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app("WORDS");
        type_keys(&mut app, "WORDS");
        app.handle_key(KeyInput::Enter);

        app.apply(AppAction::NewGame);

        assert!(!app.session.is_over());
        assert!(app.board.announcement.is_none());
        assert_eq!(app.board.rows[0][0], TileView::default());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn rejected_input_is_logged() {
        let mut app = app("WORDS");
        app.debug_log.clear();
        app.handle_key(KeyInput::Backspace);

        let entry = app.debug_log.entries().next().unwrap();
        assert_eq!(entry.text, "No letters to delete");
        assert_eq!(entry.kind, LogKind::Error);
    }

    #[test]
    fn debug_log_is_capped_newest_first() {
        let mut log = DebugLog::default();
        for i in 0..30 {
            log.push(format!("entry {i}"), LogKind::Info);
        }

        assert_eq!(log.len(), DEBUG_LOG_CAPACITY);
        assert_eq!(log.entries().next().unwrap().text, "entry 29");
        assert_eq!(log.entries().last().unwrap().text, "entry 10");
    }

    #[test]
    fn welcome_log_names_target_word() {
        let app = app("HELLO");
        assert!(
            app.debug_log
                .entries()
                .any(|entry| entry.text == "🎯 Target word: HELLO")
        );
    }

    #[test]
    fn largest_row_limit_builds_full_board() {
        let app = App::new(GameConfig::new("WORDS", crate::game::MAX_ROWS).unwrap());
        assert_eq!(app.board.rows.len(), crate::game::MAX_ROWS);
    }

    #[test]
    fn clear_log_leaves_one_notice() {
        let mut app = app("WORDS");
        app.apply(AppAction::ClearLog);
        assert_eq!(app.debug_log.len(), 1);
    }
}
