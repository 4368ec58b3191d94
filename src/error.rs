//! Error types for the stroke-to-tensor pipeline

use std::io;

use thiserror::Error;

/// Errors that can occur while preparing a drawing for classification
#[derive(Error, Debug)]
pub enum InkError {
    /// Recognition was requested with no captured points
    #[error("drawing contains no points")]
    EmptyInput,

    /// The canvas could not be allocated at the requested size
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvas { width: u32, height: u32 },

    /// IO error when reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed drawing, tensor or config JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, InkError>;
