//! Recommendation engine.

use std::sync::Arc;

use jobmatch_embeddings::{EmbeddingProvider, magnitude, rank_top_k};
use tracing::{debug, info};

use crate::config::{RecommenderConfig, ZeroVectorPolicy};
use crate::error::{RecommendError, Result};
use crate::model::{JobPosting, RankedJob};
use crate::normalize::profile_to_text;
use crate::store::ProfileStore;

/// Ranks job postings for a student by embedding similarity.
///
/// Every call reads the student and the jobs fresh from the store; nothing
/// is cached between calls.
pub struct Recommender<P, S> {
    /// Embedding model.
    provider: Arc<P>,

    /// Source of students and jobs.
    store: S,

    /// Configuration.
    config: RecommenderConfig,
}

impl<P, S> Recommender<P, S>
where
    P: EmbeddingProvider,
    S: ProfileStore,
{
    /// Create a recommender with the default configuration.
    pub fn new(provider: Arc<P>, store: S) -> Self {
        Self {
            provider,
            store,
            config: RecommenderConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Rank jobs for `student_id`, best match first.
    ///
    /// Returns at most `max_results` jobs. Jobs with equal similarity keep
    /// the order the store returned them in. Any failure aborts the run; no
    /// partial ranking is returned.
    pub async fn recommend(&self, student_id: &str) -> Result<Vec<RankedJob>> {
        let student = self
            .store
            .find_student_by_id(student_id)
            .await?
            .ok_or_else(|| RecommendError::StudentNotFound(student_id.to_string()))?;

        let mut jobs = self.store.find_jobs_with_embedding().await?;
        jobs.retain(JobPosting::has_embedding);
        if jobs.is_empty() {
            return Err(RecommendError::NoJobsAvailable);
        }

        let text = profile_to_text(&student);
        debug!(student_id, text = %text, "embedding student profile");
        let student_embedding = self.provider.embed_text(&text).await?;

        if self.config.zero_vector_policy == ZeroVectorPolicy::Exclude {
            let before = jobs.len();
            jobs.retain(|job| magnitude(job.embedding()) > 0.0);
            if jobs.len() < before {
                debug!(excluded = before - jobs.len(), "dropped zero-magnitude job embeddings");
            }
            if jobs.is_empty() {
                return Err(RecommendError::NoJobsAvailable);
            }
        }

        debug!(candidates = jobs.len(), "scoring candidates");
        let ranked = rank_top_k(
            &student_embedding,
            jobs,
            JobPosting::embedding,
            self.config.max_results,
        )?;

        info!(student_id, results = ranked.len(), "ranked jobs");
        Ok(ranked.into_iter().map(RankedJob::from).collect())
    }
}
