//! Core error types
//!
//! Extraction and generation never fail; these errors cover the edges of
//! the pipeline: configuration strings, URL encoding and wiring mistakes.

use thiserror::Error;

/// Errors raised outside the infallible extract/generate core
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("Unknown extraction mode: {value} (expected class or interface)")]
    UnknownMode { value: String },

    #[error("Unknown image format: {value} (expected img, png, svg or txt)")]
    UnknownImageFormat { value: String },

    #[error("Encoding error: {message}")]
    EncodingError { message: String },

    #[error("No diagram service configured")]
    MissingService,
}

impl UmlError {
    /// Create a new encoding error
    pub fn encoding_error(message: impl Into<String>) -> Self {
        Self::EncodingError {
            message: message.into(),
        }
    }
}
