//! Infrastructure layer for streamchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod inference;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDeploymentConfig, FileInferenceConfig,
    FileLoggingConfig, FileSessionConfig, InferenceBackend,
};
pub use inference::{EchoInference, HttpInferenceError, HttpInferenceService, SerializedInference};
pub use logging::JsonlConversationLogger;
