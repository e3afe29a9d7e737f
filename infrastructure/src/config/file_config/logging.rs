//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the diagnostic log file written in TUI mode
    pub log_dir: Option<PathBuf>,
    /// JSONL file receiving conversation events
    pub conversation_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Configured log directory, or `<data_dir>/streamchat/logs`
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("streamchat").join("logs")))
    }
}
