//! Offline inference backend that streams back a canned reply

use async_trait::async_trait;
use std::time::Duration;
use streamchat_application::{FragmentStream, InferenceError, InferenceService};
use streamchat_domain::{Message, Role, StreamEvent};

/// Replies by quoting the prompt, one character per fragment.
///
/// Used with `--backend echo` to drive the UI without a model.
#[derive(Debug, Clone)]
pub struct EchoInference {
    delay: Duration,
}

impl EchoInference {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn reply_for(prompt: &str, history: &[Message]) -> String {
        let turn = history
            .iter()
            .filter(|m| m.role == Role::User)
            .count()
            .max(1);
        format!("You said \"{}\" (turn {}).", prompt, turn)
    }
}

impl Default for EchoInference {
    fn default() -> Self {
        Self::new(Duration::from_millis(15))
    }
}

#[async_trait]
impl InferenceService for EchoInference {
    async fn predict(
        &self,
        prompt: &str,
        history: &[Message],
        _temperature: f32,
    ) -> Result<FragmentStream, InferenceError> {
        let reply = Self::reply_for(prompt, history);
        let delay = self.delay;
        let (tx, stream) = FragmentStream::channel(16);

        tokio::spawn(async move {
            for ch in reply.chars() {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if tx.send(StreamEvent::Delta(ch.to_string())).await.is_err() {
                    return;
                }
            }
            let _ = tx.send(StreamEvent::Completed(reply)).await;
        });

        Ok(stream)
    }

    async fn prompt(&self, prompt: &str, _temperature: f32) -> Result<String, InferenceError> {
        Ok(Self::reply_for(prompt, &[]))
    }
}
