//! Conversation logging adapters.
//!
//! [`JsonlConversationLogger`] appends
//! [`ConversationEvent`](streamchat_application::ConversationEvent)s to a
//! JSONL file. Diagnostic logging goes through `tracing` instead.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
