//! Inference backend configuration from TOML (`[inference]` section)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which inference worker the binary talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceBackend {
    /// Hosted endpoint over HTTP
    #[default]
    Http,
    /// In-process echo worker
    Echo,
}

impl InferenceBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceBackend::Http => "http",
            InferenceBackend::Echo => "echo",
        }
    }
}

impl fmt::Display for InferenceBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InferenceBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(InferenceBackend::Http),
            "echo" => Ok(InferenceBackend::Echo),
            other => Err(format!("unknown backend '{}' (expected http or echo)", other)),
        }
    }
}

/// Raw inference configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInferenceConfig {
    pub backend: InferenceBackend,
    /// Base URL of the inference endpoint
    pub endpoint: String,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Per-character delay of the echo worker
    pub echo_delay_ms: u64,
}

impl Default for FileInferenceConfig {
    fn default() -> Self {
        Self {
            backend: InferenceBackend::Http,
            endpoint: "http://127.0.0.1:8000".to_string(),
            api_token: None,
            echo_delay_ms: 15,
        }
    }
}

impl FileInferenceConfig {
    pub fn echo_delay(&self) -> Duration {
        Duration::from_millis(self.echo_delay_ms)
    }
}
