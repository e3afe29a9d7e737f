//! Application layer for streamchat
//!
//! This crate contains the chat session use case, port definitions and
//! session configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, SessionConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    inference::{FragmentStream, InferenceError, InferenceService},
};
pub use use_cases::chat_session::{ChatSession, Submission};
