//! Chat session settings

use streamchat_domain::SupersessionPolicy;

/// Sampling temperature sent with every request unless configured otherwise
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// System prompt placed at the head of a fresh transcript
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "be concise!. You are in the role of a human named Lee Bruce who is on a phone.";

/// Settings for a [`ChatSession`](crate::ChatSession)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Hidden first message of the transcript; `None` starts empty
    pub system_prompt: Option<String>,
    pub temperature: f32,
    pub supersession: SupersessionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            supersession: SupersessionPolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn without_system_prompt(mut self) -> Self {
        self.system_prompt = None;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_supersession(mut self, policy: SupersessionPolicy) -> Self {
        self.supersession = policy;
        self
    }
}
