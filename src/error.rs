//! Error types for the text-mix crate.

use std::path::PathBuf;

/// Mixer-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum MixError {
    /// An input to the edit-distance matrix exceeds the configured limit.
    #[error("input too long for edit-distance matrix: {len} chars (max {max})")]
    InputTooLong { len: usize, max: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for text-mix operations.
pub type MixResult<T> = Result<T, MixError>;
