//! JSON bodies exchanged with the inference endpoint.
//!
//! ```text
//! GET  /health   -> {"status": "ok", "model": "..."}
//! POST /predict  {"prompt", "history", "temperature"} -> NDJSON PredictFrame lines
//! POST /prompt   {"prompt", "temperature"}            -> {"completion": "..."}
//! ```

use serde::{Deserialize, Serialize};
use streamchat_domain::{Message, StreamEvent};

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub prompt: &'a str,
    pub history: &'a [Message],
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub completion: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// One line of a `/predict` NDJSON body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictFrame {
    /// Stream events carried by this frame, in order
    pub fn into_events(self) -> Vec<StreamEvent> {
        if let Some(error) = self.error {
            return vec![StreamEvent::Error(error)];
        }

        let mut events = Vec::with_capacity(2);
        if let Some(fragment) = self.fragment {
            if !fragment.is_empty() {
                events.push(StreamEvent::Delta(fragment));
            }
        }
        if self.done {
            events.push(StreamEvent::Completed(String::new()));
        }
        events
    }
}
