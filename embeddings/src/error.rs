//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur while embedding or scoring text.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The embedding model could not be reached or returned nothing usable.
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A zero-magnitude vector was passed to cosine similarity.
    #[error("degenerate vector: cosine similarity is undefined for a zero-magnitude vector")]
    DegenerateVector,
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(err: reqwest::Error) -> Self {
        Self::ModelUnavailable(err.to_string())
    }
}
