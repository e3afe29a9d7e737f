//! Console formatting for one-shot output

use colored::Colorize;

/// Formats replies and failures for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Line printed when a request fails
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Notice appended after a reply that failed partway
    pub fn interrupted(message: &str) -> String {
        format!(
            "\n{} {}",
            "[reply interrupted]".yellow().bold(),
            message.dimmed()
        )
    }
}
