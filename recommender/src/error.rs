//! Error types for job recommendation.

use jobmatch_embeddings::EmbeddingError;
use thiserror::Error;

/// Result type alias for recommendation operations.
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Errors that abort a recommendation run.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// No student profile exists for the requested id.
    #[error("Student not found")]
    StudentNotFound(String),

    /// No job posting carries a usable embedding.
    #[error("No jobs found")]
    NoJobsAvailable,

    /// The embedding model could not produce a vector.
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The profile store could not be read.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A zero-magnitude vector reached cosine similarity.
    #[error("degenerate vector: cosine similarity is undefined for a zero-magnitude vector")]
    DegenerateVector,

    /// Student and job embeddings come from different models.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<EmbeddingError> for RecommendError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::DegenerateVector => Self::DegenerateVector,
            EmbeddingError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
            EmbeddingError::ModelUnavailable(reason) => Self::ModelUnavailable(reason),
            other => Self::ModelUnavailable(other.to_string()),
        }
    }
}
