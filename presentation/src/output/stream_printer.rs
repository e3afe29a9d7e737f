//! Prints a streaming reply to a writer as fragments arrive

use std::io::{self, Write};
use streamchat_application::{ChatSession, InferenceService};

/// How a printed reply ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOutcome {
    pub content: String,
    /// Failure reported by the session, if the reply did not complete
    pub error: Option<String>,
}

/// Submit `text` and copy the assistant reply to `out` while it streams.
///
/// Returns once the reply is no longer pending.
pub async fn stream_reply<S, W>(
    session: &ChatSession<S>,
    text: &str,
    out: &mut W,
) -> io::Result<ReplyOutcome>
where
    S: InferenceService + 'static,
    W: Write,
{
    let mut snapshots = session.subscribe();
    let submission = session.submit(text);
    let mut printed = 0;

    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        if !snapshot.is_current(submission.epoch) {
            // Superseded by a newer submission; whatever was printed stands
            return Ok(ReplyOutcome {
                content: String::new(),
                error: None,
            });
        }

        let content = snapshot
            .transcript
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        if content.len() > printed {
            out.write_all(content[printed..].as_bytes())?;
            out.flush()?;
            printed = content.len();
        }

        if !snapshot.pending {
            return Ok(ReplyOutcome {
                content: content.to_string(),
                error: snapshot.error.clone(),
            });
        }

        if snapshots.changed().await.is_err() {
            return Ok(ReplyOutcome {
                content: content.to_string(),
                error: None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use streamchat_application::{FragmentStream, InferenceError, SessionConfig};
    use streamchat_domain::{Message, StreamEvent};

    struct Scripted(Vec<StreamEvent>);

    #[async_trait]
    impl InferenceService for Scripted {
        async fn predict(
            &self,
            _prompt: &str,
            _history: &[Message],
            _temperature: f32,
        ) -> Result<FragmentStream, InferenceError> {
            Ok(FragmentStream::from_events(self.0.clone()))
        }

        async fn prompt(&self, _prompt: &str, _temperature: f32) -> Result<String, InferenceError> {
            Ok(String::new())
        }
    }

    fn session(events: Vec<StreamEvent>) -> ChatSession<Scripted> {
        ChatSession::new(Arc::new(Scripted(events)), SessionConfig::default())
    }

    #[tokio::test]
    async fn test_prints_fragments_in_order() {
        let session = session(vec![
            StreamEvent::Delta("Hel".into()),
            StreamEvent::Delta("lo!".into()),
            StreamEvent::Completed(String::new()),
        ]);
        let mut out = Vec::new();

        let outcome = stream_reply(&session, "Hi", &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello!");
        assert_eq!(outcome.content, "Hello!");
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_reports_stream_failure() {
        let session = session(vec![
            StreamEvent::Delta("Hel".into()),
            StreamEvent::Error("worker crashed".into()),
        ]);
        let mut out = Vec::new();

        let outcome = stream_reply(&session, "Hi", &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hel");
        assert_eq!(outcome.error.as_deref(), Some("worker crashed"));
    }

    #[tokio::test]
    async fn test_empty_reply() {
        let session = session(vec![]);
        let mut out = Vec::new();

        let outcome = stream_reply(&session, "Hi", &mut out).await.unwrap();
        assert!(out.is_empty());
        assert_eq!(outcome.content, "");
        assert!(outcome.error.is_none());
    }
}
