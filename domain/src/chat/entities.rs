//! Chat domain entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire identifier for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Serializes as `{"role": ..., "content": ...}`. The failure note is local
/// state only and never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Set when the stream that was producing this message failed
    #[serde(skip)]
    pub failure: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            failure: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// An empty assistant message shown while a reply is pending
    pub fn placeholder() -> Self {
        Self::assistant("")
    }

    pub fn is_system(&self) -> bool {
        self.role == Role::System
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Copy of this message with `fragment` appended to its content
    pub fn extended(&self, fragment: &str) -> Self {
        let mut content = String::with_capacity(self.content.len() + fragment.len());
        content.push_str(&self.content);
        content.push_str(fragment);
        Self {
            role: self.role,
            content,
            failure: self.failure.clone(),
        }
    }

    /// Copy of this message flagged with a failure note
    pub fn failed(&self, reason: impl Into<String>) -> Self {
        Self {
            role: self.role,
            content: self.content.clone(),
            failure: Some(reason.into()),
        }
    }
}
