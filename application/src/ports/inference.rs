//! Inference service port
//!
//! Defines the interface to a (usually remote) text-generation worker.

use async_trait::async_trait;
use streamchat_domain::{Message, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur while talking to an inference service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Transport closed")]
    TransportClosed,
}

/// Handle for receiving the fragments of one streaming generation.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. Dropping the handle tells the
/// producer nobody is listening any more.
#[derive(Debug)]
pub struct FragmentStream {
    receiver: mpsc::Receiver<StreamEvent>,
}

impl FragmentStream {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Create a bounded channel whose receiving end is a `FragmentStream`
    pub fn channel(buffer: usize) -> (mpsc::Sender<StreamEvent>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }

    /// A stream that yields exactly `events` and then ends
    pub fn from_events(events: Vec<StreamEvent>) -> Self {
        let (tx, stream) = Self::channel(events.len());
        for event in events {
            // Capacity equals the number of events, so this cannot fail
            let _ = tx.try_send(event);
        }
        stream
    }

    /// Next event, or `None` once the producer is gone
    pub async fn recv(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }
}

/// A text-generation worker.
///
/// History is request-scoped: every call carries the full conversation and
/// implementations must not remember it between calls. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Start a streaming generation for `prompt` given `history`.
    async fn predict(
        &self,
        prompt: &str,
        history: &[Message],
        temperature: f32,
    ) -> Result<FragmentStream, InferenceError>;

    /// Generate a complete reply for `prompt` without streaming.
    async fn prompt(&self, prompt: &str, temperature: f32) -> Result<String, InferenceError>;
}
