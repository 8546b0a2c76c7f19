// src/error.rs

//! Error types for the report-serialization surface.
//!
//! The chunking pipeline itself never fails: degenerate input produces
//! empty or overflowing output as specified, not an error. Only
//! serializing results can go wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkbenchError {
    /// JSON serialization of a chunk run or report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for [`Result<T, ChunkbenchError>`].
pub type Result<T> = std::result::Result<T, ChunkbenchError>;
