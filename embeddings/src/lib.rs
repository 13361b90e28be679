//! # Embeddings
//!
//! Text embedding generation and similarity scoring for job matching.
//!
//! - **Embedding Generation**: Convert text to dense vectors through an
//!   [`EmbeddingProvider`]
//! - **Shared Provider**: Build the model client once and reuse it
//! - **Similarity Ranking**: Score candidates by cosine similarity and keep
//!   the best matches
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  text ──► EmbeddingProvider ──► Embedding                       │
//! │                                     │                           │
//! │                                     ▼                           │
//! │  candidates ──────────────► rank_top_k ──► Vec<Scored<T>>       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod provider;
pub mod shared;
pub mod similarity;

pub use error::{EmbeddingError, Result};
pub use provider::{
    EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, OpenAICompatibleProvider,
};
pub use shared::SharedProvider;
pub use similarity::{Scored, cosine_similarity, magnitude, rank_top_k};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

/// Sentence-transformer model used for both profile and job embeddings.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// Output dimension of [`DEFAULT_MODEL`].
pub const DEFAULT_DIMENSION: usize = 384;
