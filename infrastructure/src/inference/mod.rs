//! Inference service adapters

pub mod echo;
pub mod http;
pub mod serialized;

pub use echo::EchoInference;
pub use http::{HttpInferenceError, HttpInferenceService};
pub use serialized::SerializedInference;
