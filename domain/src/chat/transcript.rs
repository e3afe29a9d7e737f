//! Copy-on-write conversation transcript.
//!
//! A [`Transcript`] is never edited in place. Every change builds a new value
//! that shares nothing mutable with the old one, so a reader holding a clone
//! (the renderer, or a request's history snapshot) never sees a half-applied
//! update.

use super::entities::{Message, Role};
use std::sync::Arc;

/// Ordered, immutable sequence of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Arc<[Message]>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript seeded with a system prompt as its first element
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self::from_messages(vec![Message::system(prompt)])
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The system prompt, if the transcript starts with one
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.is_system())
            .map(|m| m.content.as_str())
    }

    /// Messages as they should be shown to the user (system role excluded)
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_system())
    }

    /// New transcript with `message` appended
    pub fn appended(&self, message: Message) -> Self {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend_from_slice(&self.messages);
        messages.push(message);
        Self::from_messages(messages)
    }

    /// New transcript whose last element is replaced by `f(last)`.
    ///
    /// Returns `None` when the transcript is empty.
    pub fn with_tail(&self, f: impl FnOnce(&Message) -> Message) -> Option<Self> {
        let (last, head) = self.messages.split_last()?;
        let mut messages = Vec::with_capacity(self.messages.len());
        messages.extend_from_slice(head);
        messages.push(f(last));
        Some(Self::from_messages(messages))
    }

    /// New transcript with `fragment` appended to the trailing assistant
    /// message. Returns `None` if the tail is not an assistant message.
    pub fn with_fragment(&self, fragment: &str) -> Option<Self> {
        if self.last()?.role != Role::Assistant {
            return None;
        }
        self.with_tail(|last| last.extended(fragment))
    }

    /// Transcript reduced to its system prompt (if any)
    pub fn reset(&self) -> Self {
        match self.system_prompt() {
            Some(prompt) => Self::with_system_prompt(prompt),
            None => Self::new(),
        }
    }
}
