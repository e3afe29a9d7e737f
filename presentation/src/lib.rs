//! Presentation layer for streamchat
//!
//! This crate contains the CLI definition, the chat TUI and the console
//! output used by the one-shot modes.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{BackendArg, Cli};
pub use output::{ConsoleFormatter, ReplyOutcome, stream_reply};
pub use tui::{ChatLabels, TuiApp};
