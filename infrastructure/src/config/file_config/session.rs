//! Chat session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use streamchat_application::{DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, SessionConfig};
use streamchat_domain::SupersessionPolicy;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// System prompt seeded into every new transcript (empty disables it)
    pub system_prompt: String,
    /// Sampling temperature sent with every request
    pub temperature: f32,
    /// What happens to an in-flight reply when a newer message is sent
    pub supersession: SupersessionPolicy,
    /// Display name for assistant messages
    pub assistant_name: String,
    /// Display name for user messages
    pub user_name: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            supersession: SupersessionPolicy::default(),
            assistant_name: "MyAssistant".to_string(),
            user_name: "You".to_string(),
        }
    }
}

impl FileSessionConfig {
    /// Convert to the application-layer session configuration
    pub fn to_session_config(&self) -> SessionConfig {
        let config = SessionConfig::default()
            .with_temperature(self.temperature)
            .with_supersession(self.supersession);

        if self.system_prompt.trim().is_empty() {
            config.without_system_prompt()
        } else {
            config.with_system_prompt(self.system_prompt.clone())
        }
    }
}
