//! Application-level configuration types

mod session_config;

pub use session_config::{DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, SessionConfig};
