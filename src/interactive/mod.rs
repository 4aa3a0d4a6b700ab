//! Interactive TUI interface
//!
//! Full-screen terminal game for both play modes, built on ratatui + crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, PlayMode, Statistics, run_tui};
