//! Game session: input state machine and its rendering seam
//!
//! [`Session`] owns the cursor, the board and the game-over flag. Every
//! operation reports display changes through a [`Renderer`], so the same
//! session drives the TUI, the line-based mode and the tests.

mod config;
mod error;
mod input;
mod renderer;
mod session;
mod stats;

pub use config::{ConfigError, DEFAULT_MAX_ROWS, DEFAULT_SECRET, GameConfig, MAX_ROWS};
pub use error::InputError;
pub use input::{Handled, KeyInput, dispatch};
pub use renderer::{NullRenderer, Outcome, Renderer};
pub use session::{Cursor, Session, SubmittedRow};
pub use stats::Statistics;
