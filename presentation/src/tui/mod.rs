//! TUI (Text User Interface) module for streamchat
//!
//! A single-conversation chat screen built on ratatui. The session does the
//! work; the TUI renders its snapshots and forwards key presses.

mod app;
mod command;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use command::{SlashCommand, Submitted};
pub use keys::{KeyAction, map_key};
pub use state::{ChatLabels, TuiState};
