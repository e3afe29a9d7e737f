//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout one section per module.

mod deployment;
mod inference;
mod logging;
mod session;

pub use deployment::FileDeploymentConfig;
pub use inference::{FileInferenceConfig, InferenceBackend};
pub use logging::FileLoggingConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Temperatures accepted by the inference endpoint
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("session.temperature must be a number between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("inference.endpoint cannot be empty when backend is http")]
    EmptyEndpoint,

    #[error("deployment.max_concurrency must be greater than 0")]
    ZeroConcurrency,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub inference: FileInferenceConfig,
    pub deployment: FileDeploymentConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let temperature = self.session.temperature;
        if !temperature.is_finite() || !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(ConfigValidationError::InvalidTemperature(temperature));
        }

        if self.inference.backend == InferenceBackend::Http
            && self.inference.endpoint.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        if self.deployment.max_concurrency == 0 {
            return Err(ConfigValidationError::ZeroConcurrency);
        }

        Ok(())
    }

    /// A copy safe to print: secrets are masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.inference.api_token.is_some() {
            config.inference.api_token = Some("********".to_string());
        }
        config
    }
}
