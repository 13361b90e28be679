//! # Job Recommender
//!
//! Ranks job postings for a student by comparing the embedding of the
//! student's profile text against embeddings stored with each posting.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ProfileStore ──► StudentProfile ──► profile_to_text            │
//! │       │                                    │                    │
//! │       ▼                                    ▼                    │
//! │  JobPosting[] (embedded)            EmbeddingProvider           │
//! │       │                                    │                    │
//! │       └──────────► rank_top_k ◄────────────┘                    │
//! │                        │                                        │
//! │                        ▼                                        │
//! │                  Vec<RankedJob>                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jobmatch_recommender::{JsonDocumentStore, Recommender};
//!
//! let store = JsonDocumentStore::open("./data").await?;
//! let recommender = Recommender::new(provider, store);
//! let jobs = recommender.recommend("665f1c0a9b").await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;

pub use config::{RecommenderConfig, ZeroVectorPolicy};
pub use engine::Recommender;
pub use error::{RecommendError, Result};
pub use model::{Education, JobPosting, License, Project, RankedJob, StudentProfile};
pub use normalize::{normalize_text, profile_to_text};
pub use store::{InMemoryStore, JsonDocumentStore, ProfileStore};

// Re-export from dependencies for convenience
pub use jobmatch_embeddings::{EmbeddingProvider, SharedProvider};
