//! HTTP adapter for the hosted inference endpoint

pub mod client;
pub mod error;
pub mod ndjson;
pub mod protocol;

pub use client::HttpInferenceService;
pub use error::HttpInferenceError;
