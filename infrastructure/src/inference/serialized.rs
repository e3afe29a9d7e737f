//! One-request-at-a-time wrapper around an inference worker.
//!
//! A worker runs one generation at a time. The lock is taken before the
//! inner call starts and is held until the returned stream ends, fails, or
//! its consumer drops it. Requests queue in arrival order.

use async_trait::async_trait;
use std::sync::Arc;
use streamchat_application::{FragmentStream, InferenceError, InferenceService};
use streamchat_domain::Message;
use tokio::sync::Mutex;
use tracing::debug;

const FORWARD_BUFFER: usize = 64;

pub struct SerializedInference<S> {
    inner: S,
    worker: Arc<Mutex<()>>,
}

impl<S> SerializedInference<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            worker: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl<S: InferenceService> InferenceService for SerializedInference<S> {
    async fn predict(
        &self,
        prompt: &str,
        history: &[Message],
        temperature: f32,
    ) -> Result<FragmentStream, InferenceError> {
        let guard = Arc::clone(&self.worker).lock_owned().await;
        debug!("Worker acquired for streaming request");

        let mut upstream = self.inner.predict(prompt, history, temperature).await?;
        let (tx, stream) = FragmentStream::channel(FORWARD_BUFFER);

        tokio::spawn(async move {
            let _guard = guard;
            loop {
                let event = tokio::select! {
                    _ = tx.closed() => break,
                    event = upstream.recv() => event,
                };
                let Some(event) = event else { break };

                let terminal = event.is_terminal();
                if tx.send(event).await.is_err() || terminal {
                    break;
                }
            }
            debug!("Worker released");
        });

        Ok(stream)
    }

    async fn prompt(&self, prompt: &str, temperature: f32) -> Result<String, InferenceError> {
        let _guard = self.worker.lock().await;
        self.inner.prompt(prompt, temperature).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamchat_domain::StreamEvent;
    use tokio::sync::mpsc;

    /// Worker whose streams are fed by the test
    struct HandoffWorker {
        handoff: mpsc::UnboundedSender<(String, mpsc::Sender<StreamEvent>)>,
    }

    #[async_trait]
    impl InferenceService for HandoffWorker {
        async fn predict(
            &self,
            prompt: &str,
            _history: &[Message],
            _temperature: f32,
        ) -> Result<FragmentStream, InferenceError> {
            let (tx, stream) = FragmentStream::channel(8);
            self.handoff
                .send((prompt.to_string(), tx))
                .map_err(|_| InferenceError::TransportClosed)?;
            Ok(stream)
        }

        async fn prompt(&self, prompt: &str, _temperature: f32) -> Result<String, InferenceError> {
            Ok(prompt.to_uppercase())
        }
    }

    fn worker() -> (
        Arc<SerializedInference<HandoffWorker>>,
        mpsc::UnboundedReceiver<(String, mpsc::Sender<StreamEvent>)>,
    ) {
        let (handoff, rx) = mpsc::unbounded_channel();
        (Arc::new(SerializedInference::new(HandoffWorker { handoff })), rx)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_second_request_waits_for_first_stream() {
        let (service, mut handoffs) = worker();

        let mut first = service.predict("one", &[], 0.1).await.unwrap();
        let (_, first_tx) = handoffs.recv().await.unwrap();
        assert!(service.worker.try_lock().is_err());

        let queued = Arc::clone(&service);
        let second = tokio::spawn(async move { queued.predict("two", &[], 0.1).await });
        settle().await;
        assert!(handoffs.try_recv().is_err(), "second request must not start yet");

        first_tx.send(StreamEvent::Delta("a".into())).await.unwrap();
        first_tx.send(StreamEvent::Completed(String::new())).await.unwrap();
        assert_eq!(first.recv().await, Some(StreamEvent::Delta("a".into())));
        assert_eq!(first.recv().await, Some(StreamEvent::Completed(String::new())));

        let (prompt, _second_tx) = handoffs.recv().await.unwrap();
        assert_eq!(prompt, "two");
        assert!(second.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_dropping_stream_releases_worker() {
        let (service, mut handoffs) = worker();

        let first = service.predict("one", &[], 0.1).await.unwrap();
        let (_, first_tx) = handoffs.recv().await.unwrap();
        drop(first);

        first_tx.closed().await;
        let _second = service.predict("two", &[], 0.1).await.unwrap();
        assert_eq!(handoffs.recv().await.unwrap().0, "two");
    }

    #[tokio::test]
    async fn test_prompt_waits_for_stream() {
        let (service, mut handoffs) = worker();

        let _first = service.predict("one", &[], 0.1).await.unwrap();
        let (_, first_tx) = handoffs.recv().await.unwrap();

        let queued = Arc::clone(&service);
        let prompt = tokio::spawn(async move { queued.prompt("hi", 0.1).await });
        settle().await;
        assert!(!prompt.is_finished());

        drop(first_tx);
        assert_eq!(prompt.await.unwrap().unwrap(), "HI");
    }
}
