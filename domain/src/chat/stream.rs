//! Streaming events for inference replies.
//!
//! [`StreamEvent`] is one item of a streaming generation: an incremental text
//! fragment, or a terminal marker.

/// An event in a streaming inference response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment, to be appended in arrival order.
    Delta(String),
    /// Generation finished. Carries the full text when the producer knows it,
    /// or an empty string.
    Completed(String),
    /// Generation failed partway.
    Error(String),
}

impl StreamEvent {
    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}
