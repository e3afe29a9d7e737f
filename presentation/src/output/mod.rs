//! Console output for the one-shot modes

pub mod console;
pub mod stream_printer;

pub use console::ConsoleFormatter;
pub use stream_printer::{ReplyOutcome, stream_reply};
