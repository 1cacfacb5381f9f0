//! Wordle Game
//!
//! A terminal Wordle game: a duplicate-letter-correct guess evaluator driven by
//! a small input state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//! use wordle_game::game::{GameConfig, NullRenderer, Session};
//!
//! // Evaluate a guess directly
//! let guess = Word::new("erase").unwrap();
//! let secret = Word::new("speed").unwrap();
//! println!("{}", Feedback::calculate(&guess, &secret));
//!
//! // Or play through a session
//! let mut session = Session::new(GameConfig::default());
//! for c in "WORDS".chars() {
//!     session.add_letter(c, &mut NullRenderer).unwrap();
//! }
//! assert!(session.submit_guess(&mut NullRenderer).unwrap().is_perfect());
//! assert!(session.is_over());
//! ```

// Core domain types
pub mod core;

// Input state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
