//! Chat session controller
//!
//! Owns the canonical transcript and runs at most one live streaming request.
//!
//! ```text
//! submit("Hi")
//!   ├─ append {user, "Hi"}, {assistant, ""}, advance epoch   (one atomic step)
//!   └─ spawn reply task(epoch, history)
//!         └─ for each fragment:
//!               epoch still current? ── no ──> stop, touch nothing
//!                      │ yes
//!                      └─ replace tail with {assistant, tail + fragment}
//! ```
//!
//! State is published through a `watch` channel. The epoch check and the
//! tail replacement run inside the same `send_if_modified` call, so a task
//! can never write after a newer submission has advanced the epoch.

use crate::config::SessionConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::inference::{InferenceError, InferenceService};
use serde_json::json;
use std::sync::{Arc, Mutex};
use streamchat_domain::{Epoch, Message, SessionSnapshot, StreamEvent, Transcript};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of [`ChatSession::submit`]
pub struct Submission {
    /// Epoch the new request runs under
    pub epoch: Epoch,
    /// The streaming task; it ends when the reply completes, fails, or is
    /// superseded
    pub task: JoinHandle<()>,
}

/// Chat session controller
pub struct ChatSession<S: InferenceService + 'static> {
    service: Arc<S>,
    config: SessionConfig,
    state: Arc<watch::Sender<SessionSnapshot>>,
    /// Cancellation token of the live reply task
    live: Mutex<Option<CancellationToken>>,
    logger: Arc<dyn ConversationLogger>,
}

impl<S: InferenceService + 'static> ChatSession<S> {
    pub fn new(service: Arc<S>, config: SessionConfig) -> Self {
        let transcript = match &config.system_prompt {
            Some(prompt) => Transcript::with_system_prompt(prompt.clone()),
            None => Transcript::new(),
        };
        let (state, _) = watch::channel(SessionSnapshot::new(transcript));

        Self {
            service,
            config,
            state: Arc::new(state),
            live: Mutex::new(None),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set a conversation logger for structured event logging.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Send a user message and stream the assistant's reply into the
    /// transcript.
    ///
    /// When this returns, the transcript already ends with the user message
    /// followed by an empty assistant placeholder. Any earlier reply loses
    /// its right to modify the transcript.
    pub fn submit(&self, user_text: impl Into<String>) -> Submission {
        let prompt = user_text.into();
        let mut epoch = Epoch::default();
        let mut history = Transcript::default();
        let mut superseded = None;

        self.state.send_modify(|snapshot| {
            superseded = snapshot.pending.then_some(snapshot.epoch);
            snapshot.transcript = snapshot
                .transcript
                .appended(Message::user(prompt.clone()))
                .appended(Message::placeholder());
            snapshot.epoch = snapshot.epoch.next();
            snapshot.pending = true;
            snapshot.error = None;
            epoch = snapshot.epoch;
            history = snapshot.transcript.clone();
        });

        info!("Submitting request {} ({} messages of history)", epoch, history.len());
        self.logger.log(ConversationEvent::new(
            "user_message",
            json!({ "epoch": epoch.value(), "content": prompt }),
        ));
        if let Some(stale) = superseded {
            self.logger.log(ConversationEvent::new(
                "superseded",
                json!({ "epoch": stale.value(), "reason": "newer request" }),
            ));
        }

        let token = CancellationToken::new();
        self.replace_live(
            Some(token.clone()),
            self.config.supersession.cancels_stale_tasks(),
        );

        let reply = ReplyTask {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            logger: Arc::clone(&self.logger),
            epoch,
            prompt,
            history,
            temperature: self.config.temperature,
            token,
        };
        let task = tokio::spawn(reply.run());

        Submission { epoch, task }
    }

    /// Non-streaming request. The transcript is not touched.
    pub async fn prompt(&self, text: &str) -> Result<String, InferenceError> {
        debug!("Sending non-streaming prompt ({} bytes)", text.len());
        let result = self.service.prompt(text, self.config.temperature).await;
        match &result {
            Ok(completion) => self.logger.log(ConversationEvent::new(
                "prompt",
                json!({ "prompt": text, "completion": completion }),
            )),
            Err(e) => warn!("Prompt failed: {}", e),
        }
        result
    }

    /// Stop the live reply, keeping whatever it produced so far.
    ///
    /// Returns false when nothing was pending.
    pub fn cancel(&self) -> bool {
        let mut stopped = None;
        self.state.send_if_modified(|snapshot| {
            if !snapshot.pending {
                return false;
            }
            stopped = Some(snapshot.epoch);
            snapshot.epoch = snapshot.epoch.next();
            snapshot.pending = false;
            true
        });
        self.replace_live(None, true);

        match stopped {
            Some(epoch) => {
                info!("Request {} stopped by user", epoch);
                self.logger.log(ConversationEvent::new(
                    "superseded",
                    json!({ "epoch": epoch.value(), "reason": "cancelled" }),
                ));
                true
            }
            None => false,
        }
    }

    /// Supersede any live reply and reset the transcript to its system prompt.
    pub fn clear(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.transcript = snapshot.transcript.reset();
            snapshot.epoch = snapshot.epoch.next();
            snapshot.pending = false;
            snapshot.error = None;
        });
        self.replace_live(None, true);
        info!("Conversation cleared");
    }

    /// Swap the live token, optionally cancelling the previous task.
    ///
    /// Explicit stops always cancel; a newer submission cancels only under
    /// the abort policy.
    fn replace_live(&self, next: Option<CancellationToken>, cancel_previous: bool) {
        let previous = {
            let mut live = self.live.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::replace(&mut *live, next)
        };

        if let Some(previous) = previous {
            if cancel_previous {
                previous.cancel();
            }
        }
    }
}

/// One streaming reply, bound to the epoch it was started under.
struct ReplyTask<S: InferenceService + 'static> {
    service: Arc<S>,
    state: Arc<watch::Sender<SessionSnapshot>>,
    logger: Arc<dyn ConversationLogger>,
    epoch: Epoch,
    prompt: String,
    history: Transcript,
    temperature: f32,
    token: CancellationToken,
}

impl<S: InferenceService + 'static> ReplyTask<S> {
    async fn run(self) {
        let mut stream = tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("Request {} aborted before the stream opened", self.epoch);
                return;
            }
            opened = self.service.predict(&self.prompt, self.history.messages(), self.temperature) => {
                match opened {
                    Ok(stream) => stream,
                    Err(e) => {
                        self.fail(e.to_string());
                        return;
                    }
                }
            }
        };

        let mut received = false;
        loop {
            let event = tokio::select! {
                biased;
                _ = self.token.cancelled() => {
                    debug!("Request {} aborted", self.epoch);
                    return;
                }
                event = stream.recv() => event,
            };

            match event {
                Some(StreamEvent::Delta(fragment)) => {
                    received = true;
                    if !self.apply(&fragment) {
                        self.superseded();
                        return;
                    }
                }
                Some(StreamEvent::Completed(text)) => {
                    if !received && !text.is_empty() && !self.apply(&text) {
                        self.superseded();
                        return;
                    }
                    self.finish();
                    return;
                }
                Some(StreamEvent::Error(message)) => {
                    self.fail(message);
                    return;
                }
                None => {
                    self.finish();
                    return;
                }
            }
        }
    }

    /// Append `fragment` to the tail if this task is still current.
    fn apply(&self, fragment: &str) -> bool {
        let mut current = false;
        self.state.send_if_modified(|snapshot| {
            if !snapshot.is_current(self.epoch) {
                return false;
            }
            current = true;
            match snapshot.transcript.with_fragment(fragment) {
                Some(transcript) => {
                    snapshot.transcript = transcript;
                    true
                }
                None => false,
            }
        });
        current
    }

    fn finish(&self) {
        let mut reply = None;
        self.state.send_if_modified(|snapshot| {
            if !snapshot.is_current(self.epoch) {
                return false;
            }
            reply = snapshot.transcript.last().map(|m| m.content.clone());
            snapshot.pending = false;
            true
        });

        match reply {
            Some(content) => {
                debug!("Request {} completed ({} bytes)", self.epoch, content.len());
                self.logger.log(ConversationEvent::new(
                    "assistant_reply",
                    json!({ "epoch": self.epoch.value(), "content": content }),
                ));
            }
            None => debug!("Request {} finished after being superseded", self.epoch),
        }
    }

    fn fail(&self, message: String) {
        let mut recorded = false;
        self.state.send_if_modified(|snapshot| {
            if !snapshot.is_current(self.epoch) {
                return false;
            }
            if let Some(transcript) = snapshot.transcript.with_tail(|last| last.failed(&message)) {
                snapshot.transcript = transcript;
            }
            snapshot.pending = false;
            snapshot.error = Some(message.clone());
            recorded = true;
            true
        });

        if recorded {
            warn!("Request {} failed: {}", self.epoch, message);
            self.logger.log(ConversationEvent::new(
                "stream_error",
                json!({ "epoch": self.epoch.value(), "error": message }),
            ));
        } else {
            debug!("Ignoring failure of superseded request {}: {}", self.epoch, message);
        }
    }

    fn superseded(&self) {
        debug!("Request {} superseded, dropping its stream", self.epoch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference::FragmentStream;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use streamchat_domain::{Role, SupersessionPolicy};
    use tokio::sync::mpsc;

    struct RecordedCall {
        prompt: String,
        history: Vec<Message>,
        temperature: f32,
    }

    /// Replies with pre-scripted event lists, one per predict call
    #[derive(Default)]
    struct FixedInference {
        replies: Mutex<VecDeque<Result<Vec<StreamEvent>, InferenceError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl FixedInference {
        fn with_reply(events: Vec<StreamEvent>) -> Self {
            let service = Self::default();
            service.replies.lock().unwrap().push_back(Ok(events));
            service
        }

        fn failing(error: InferenceError) -> Self {
            let service = Self::default();
            service.replies.lock().unwrap().push_back(Err(error));
            service
        }
    }

    #[async_trait]
    impl InferenceService for FixedInference {
        async fn predict(
            &self,
            prompt: &str,
            history: &[Message],
            temperature: f32,
        ) -> Result<FragmentStream, InferenceError> {
            self.calls.lock().unwrap().push(RecordedCall {
                prompt: prompt.to_string(),
                history: history.to_vec(),
                temperature,
            });
            let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()));
            reply.map(FragmentStream::from_events)
        }

        async fn prompt(&self, prompt: &str, _temperature: f32) -> Result<String, InferenceError> {
            Ok(format!("completion of {}", prompt))
        }
    }

    /// Hands the sending side of every stream to the test
    struct ManualInference {
        handoff: mpsc::UnboundedSender<mpsc::Sender<StreamEvent>>,
    }

    impl ManualInference {
        fn new() -> (Self, mpsc::UnboundedReceiver<mpsc::Sender<StreamEvent>>) {
            let (handoff, rx) = mpsc::unbounded_channel();
            (Self { handoff }, rx)
        }
    }

    #[async_trait]
    impl InferenceService for ManualInference {
        async fn predict(
            &self,
            _prompt: &str,
            _history: &[Message],
            _temperature: f32,
        ) -> Result<FragmentStream, InferenceError> {
            let (tx, stream) = FragmentStream::channel(16);
            self.handoff
                .send(tx)
                .map_err(|_| InferenceError::TransportClosed)?;
            Ok(stream)
        }

        async fn prompt(&self, _prompt: &str, _temperature: f32) -> Result<String, InferenceError> {
            Err(InferenceError::RequestFailed("not scripted".into()))
        }
    }

    /// Keeps every conversation event for inspection
    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingLogger {
        fn names(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|(name, _)| *name).collect()
        }

        fn payload(&self, name: &str) -> Option<serde_json::Value> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, payload)| payload.clone())
        }
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push((event.event_type, event.payload));
        }
    }

    fn delta(s: &str) -> StreamEvent {
        StreamEvent::Delta(s.to_string())
    }

    fn tail<S: InferenceService + 'static>(session: &ChatSession<S>) -> Vec<Message> {
        let snapshot = session.snapshot();
        let messages = snapshot.transcript.messages();
        messages[messages.len().saturating_sub(2)..].to_vec()
    }

    async fn wait_for_tail(rx: &mut watch::Receiver<SessionSnapshot>, content: &str) {
        rx.wait_for(|s| s.transcript.last().is_some_and(|m| m.content == content))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fragments_concatenate_in_order() {
        let service = Arc::new(FixedInference::with_reply(vec![
            delta("Hel"),
            delta("lo!"),
            StreamEvent::Completed(String::new()),
        ]));
        let session = ChatSession::new(service.clone(), SessionConfig::default());

        let submission = session.submit("Hi");
        submission.task.await.unwrap();

        assert_eq!(tail(&session), vec![Message::user("Hi"), Message::assistant("Hello!")]);
        let snapshot = session.snapshot();
        assert!(!snapshot.pending);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_predict_receives_history_with_placeholder() {
        let service = Arc::new(FixedInference::with_reply(vec![delta("ok")]));
        let session = ChatSession::new(
            service.clone(),
            SessionConfig::default()
                .with_system_prompt("sys")
                .with_temperature(0.4),
        );

        session.submit("question").task.await.unwrap();

        let calls = service.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "question");
        assert_eq!(calls[0].temperature, 0.4);
        assert_eq!(
            calls[0].history,
            vec![
                Message::system("sys"),
                Message::user("question"),
                Message::placeholder(),
            ]
        );
    }

    #[tokio::test]
    async fn test_placeholder_present_before_any_fragment() {
        let service = Arc::new(FixedInference::with_reply(vec![delta("late")]));
        let session = ChatSession::new(service, SessionConfig::default());

        // Current-thread runtime: the reply task cannot run until we yield.
        let submission = session.submit("Hi");

        assert_eq!(tail(&session), vec![Message::user("Hi"), Message::placeholder()]);
        let snapshot = session.snapshot();
        assert!(snapshot.pending);
        assert_eq!(snapshot.epoch, submission.epoch);
        assert!(!snapshot.accepts_input());

        submission.task.await.unwrap();
        assert_eq!(tail(&session)[1], Message::assistant("late"));
    }

    #[tokio::test]
    async fn test_empty_stream_leaves_placeholder() {
        let service = Arc::new(FixedInference::with_reply(Vec::new()));
        let session = ChatSession::new(service, SessionConfig::default());

        session.submit("Hi").task.await.unwrap();

        assert_eq!(tail(&session), vec![Message::user("Hi"), Message::placeholder()]);
        let snapshot = session.snapshot();
        assert!(!snapshot.pending);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_completed_text_used_when_no_deltas() {
        let service = Arc::new(FixedInference::with_reply(vec![StreamEvent::Completed(
            "whole reply".into(),
        )]));
        let session = ChatSession::new(service, SessionConfig::default());

        session.submit("Hi").task.await.unwrap();

        assert_eq!(tail(&session)[1], Message::assistant("whole reply"));
    }

    #[tokio::test]
    async fn test_newer_submit_supersedes_older_stream() {
        let (service, mut streams) = ManualInference::new();
        let session = ChatSession::new(Arc::new(service), SessionConfig::default());
        let mut rx = session.subscribe();

        let first = session.submit("first");
        let first_tx = streams.recv().await.unwrap();
        first_tx.send(delta("a")).await.unwrap();
        wait_for_tail(&mut rx, "a").await;

        let second = session.submit("second");
        assert!(second.epoch > first.epoch);
        let second_tx = streams.recv().await.unwrap();

        // The old stream keeps producing, but must not reach the transcript.
        first_tx.send(delta("STALE")).await.unwrap();
        drop(first_tx);
        first.task.await.unwrap();

        let snapshot = session.snapshot();
        let contents: Vec<_> = snapshot
            .transcript
            .visible()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            contents,
            vec![
                (Role::User, "first"),
                (Role::Assistant, "a"),
                (Role::User, "second"),
                (Role::Assistant, ""),
            ]
        );
        // A finished stale task does not clear the newer request's pending flag.
        assert!(snapshot.pending);

        second_tx.send(delta("ok")).await.unwrap();
        drop(second_tx);
        second.task.await.unwrap();

        assert_eq!(tail(&session), vec![Message::user("second"), Message::assistant("ok")]);
        assert!(!session.snapshot().pending);
    }

    #[tokio::test]
    async fn test_abort_policy_cancels_waiting_task() {
        let (service, mut streams) = ManualInference::new();
        let session = ChatSession::new(
            Arc::new(service),
            SessionConfig::default().with_supersession(SupersessionPolicy::Abort),
        );

        let first = session.submit("first");
        let first_tx = streams.recv().await.unwrap();

        let _second = session.submit("second");

        // The first task ends although its stream never produced anything.
        first.task.await.unwrap();
        assert!(first_tx.is_closed());
        assert_eq!(tail(&session), vec![Message::user("second"), Message::placeholder()]);
    }

    #[tokio::test]
    async fn test_stream_error_flags_assistant_message() {
        let service = Arc::new(FixedInference::with_reply(vec![
            delta("par"),
            StreamEvent::Error("generation crashed".into()),
        ]));
        let session = ChatSession::new(service, SessionConfig::default());

        session.submit("Hi").task.await.unwrap();

        let snapshot = session.snapshot();
        let last = snapshot.transcript.last().unwrap();
        assert_eq!(last.content, "par");
        assert_eq!(last.failure.as_deref(), Some("generation crashed"));
        assert_eq!(snapshot.error.as_deref(), Some("generation crashed"));
        assert!(!snapshot.pending);
    }

    #[tokio::test]
    async fn test_connection_failure_is_visible() {
        let service = Arc::new(FixedInference::failing(InferenceError::Connection(
            "refused".into(),
        )));
        let session = ChatSession::new(service, SessionConfig::default());

        session.submit("Hi").task.await.unwrap();

        let snapshot = session.snapshot();
        assert!(snapshot.transcript.last().unwrap().is_failed());
        assert_eq!(snapshot.error.as_deref(), Some("Connection error: refused"));
        assert!(!snapshot.pending);
    }

    #[tokio::test]
    async fn test_cancel_stops_live_reply() {
        let (service, mut streams) = ManualInference::new();
        let session = ChatSession::new(Arc::new(service), SessionConfig::default());
        let mut rx = session.subscribe();

        let submission = session.submit("Hi");
        let tx = streams.recv().await.unwrap();
        tx.send(delta("part")).await.unwrap();
        wait_for_tail(&mut rx, "part").await;

        assert!(session.cancel());
        assert!(!session.snapshot().pending);
        assert!(!session.cancel());

        submission.task.await.unwrap();
        assert!(tx.is_closed());
        assert_eq!(tail(&session)[1], Message::assistant("part"));
    }

    #[tokio::test]
    async fn test_clear_resets_to_system_prompt() {
        let service = Arc::new(FixedInference::with_reply(vec![delta("Hello")]));
        let session =
            ChatSession::new(service, SessionConfig::default().with_system_prompt("sys"));

        session.submit("Hi").task.await.unwrap();
        session.clear();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.transcript.messages(), &[Message::system("sys")]);
        assert_eq!(snapshot.transcript.visible().count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_returns_completion_verbatim() {
        let service = Arc::new(FixedInference::default());
        let session = ChatSession::new(service, SessionConfig::default().without_system_prompt());

        let completion = session.prompt("tell me").await.unwrap();

        assert_eq!(completion, "completion of tell me");
        assert!(session.snapshot().transcript.is_empty());
    }

    async fn logged_supersession(policy: SupersessionPolicy) -> (Arc<RecordingLogger>, Epoch) {
        let (service, mut streams) = ManualInference::new();
        let logger = Arc::new(RecordingLogger::default());
        let session = ChatSession::new(
            Arc::new(service),
            SessionConfig::default().with_supersession(policy),
        )
        .with_conversation_logger(logger.clone());

        let first = session.submit("one");
        let first_tx = streams.recv().await.unwrap();
        let second = session.submit("two");
        let second_tx = streams.recv().await.unwrap();

        // Ignored under abort, where the first task is already gone
        let _ = first_tx.send(delta("stale")).await;
        drop(first_tx);
        first.task.await.unwrap();

        second_tx.send(delta("ok")).await.unwrap();
        drop(second_tx);
        second.task.await.unwrap();

        (logger, first.epoch)
    }

    #[tokio::test]
    async fn test_supersession_logged_under_ignore_policy() {
        let (logger, stale) = logged_supersession(SupersessionPolicy::Ignore).await;

        assert_eq!(
            logger.names(),
            vec!["user_message", "user_message", "superseded", "assistant_reply"]
        );
        assert_eq!(
            logger.payload("superseded"),
            Some(json!({ "epoch": stale.value(), "reason": "newer request" }))
        );
    }

    #[tokio::test]
    async fn test_supersession_logged_under_abort_policy() {
        let (logger, stale) = logged_supersession(SupersessionPolicy::Abort).await;

        assert_eq!(
            logger.names(),
            vec!["user_message", "user_message", "superseded", "assistant_reply"]
        );
        assert_eq!(
            logger.payload("superseded"),
            Some(json!({ "epoch": stale.value(), "reason": "newer request" }))
        );
        assert_eq!(
            logger.payload("assistant_reply"),
            Some(json!({ "epoch": stale.next().value(), "content": "ok" }))
        );
    }

    #[tokio::test]
    async fn test_stream_error_and_prompt_are_logged() {
        let service = Arc::new(FixedInference::with_reply(vec![
            delta("par"),
            StreamEvent::Error("generation crashed".into()),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let session = ChatSession::new(service, SessionConfig::default())
            .with_conversation_logger(logger.clone());

        let submission = session.submit("Hi");
        submission.task.await.unwrap();
        session.prompt("tell me").await.unwrap();

        assert_eq!(logger.names(), vec!["user_message", "stream_error", "prompt"]);
        assert_eq!(
            logger.payload("stream_error"),
            Some(json!({ "epoch": submission.epoch.value(), "error": "generation crashed" }))
        );
        assert_eq!(
            logger.payload("prompt"),
            Some(json!({ "prompt": "tell me", "completion": "completion of tell me" }))
        );
    }

    #[tokio::test]
    async fn test_finished_reply_does_not_log_supersession() {
        let service = Arc::new(FixedInference::with_reply(vec![delta("Hello")]));
        let logger = Arc::new(RecordingLogger::default());
        let session = ChatSession::new(service, SessionConfig::default())
            .with_conversation_logger(logger.clone());

        session.submit("Hi").task.await.unwrap();
        session.submit("again").task.await.unwrap();

        assert_eq!(
            logger.names(),
            vec!["user_message", "assistant_reply", "user_message", "assistant_reply"]
        );
    }
}
