//! Deployment descriptors from TOML (`[deployment]` section)
//!
//! These describe how the hosted worker was provisioned. They are reported
//! by `--show-config` and never sent with a request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeploymentConfig {
    pub app_name: String,
    pub class_name: String,
    /// Quantized weights file loaded by the worker
    pub model_file: String,
    pub gpu: String,
    /// Concurrent requests the hosted app admits
    pub max_concurrency: u32,
}

impl Default for FileDeploymentConfig {
    fn default() -> Self {
        Self {
            app_name: "solara-llm-demo".to_string(),
            class_name: "Model".to_string(),
            model_file: "Llama-3.2-1B-Instruct-Q4_0.gguf".to_string(),
            gpu: "a10g".to_string(),
            max_concurrency: 2,
        }
    }
}
