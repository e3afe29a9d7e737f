//! Parsing of submitted input lines

/// Slash commands understood by the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Clear,
    Help,
    Quit,
    Unknown(String),
}

/// What a submitted line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// Nothing but whitespace
    Empty,
    Message(String),
    Command(SlashCommand),
}

impl Submitted {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Submitted::Empty;
        }

        let Some(command) = trimmed.strip_prefix('/') else {
            return Submitted::Message(trimmed.to_string());
        };

        let name = command.split_whitespace().next().unwrap_or("");
        Submitted::Command(match name.to_lowercase().as_str() {
            "clear" => SlashCommand::Clear,
            "help" | "h" | "?" => SlashCommand::Help,
            "quit" | "exit" | "q" => SlashCommand::Quit,
            _ => SlashCommand::Unknown(name.to_string()),
        })
    }
}
