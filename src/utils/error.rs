//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Note that "no data" is deliberately NOT an error: the aggregator signals it
//! with an empty result so the caller can render a fallback display instead
//! of failing the refresh cycle.

use thiserror::Error;

/// Errors that can occur while loading frame sets
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid frame format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration values rejected at the pipeline boundary
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Top-N count must be at least 1, got {0}")]
    InvalidTopN(usize),

    #[error("Threshold must be within 0..=100, got {0}")]
    InvalidThreshold(f64),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
