//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    App, AppAction, BoardView, DEBUG_LOG_CAPACITY, DebugEntry, DebugLog, LogKind, TileView,
    run_tui,
};
