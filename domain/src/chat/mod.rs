//! Chat domain.
//!
//! - [`entities::Message`]: a single message and its [`entities::Role`]
//! - [`transcript::Transcript`]: copy-on-write conversation history
//! - [`epoch::Epoch`]: token for the currently authoritative request
//! - [`stream::StreamEvent`]: one item of a streaming reply
//! - [`snapshot::SessionSnapshot`]: state published to renderers

pub mod entities;
pub mod epoch;
pub mod policy;
pub mod snapshot;
pub mod stream;
pub mod transcript;
