//! Domain layer for streamchat
//!
//! This crate contains the conversation model shared by every other layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: ordered messages, replaced whole on every change
//! - **Epoch**: only the request started under the current epoch may
//!   change the transcript tail; older requests are superseded

pub mod chat;

pub use chat::{
    entities::{Message, Role},
    epoch::Epoch,
    policy::SupersessionPolicy,
    snapshot::SessionSnapshot,
    stream::StreamEvent,
    transcript::Transcript,
};
