//! Configuration for the recommender.

use serde::{Deserialize, Serialize};

/// Number of jobs returned when nothing else is configured.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Configuration for a recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum number of ranked jobs to return.
    pub max_results: usize,

    /// What to do with zero-magnitude vectors.
    pub zero_vector_policy: ZeroVectorPolicy,
}

impl RecommenderConfig {
    /// Set the maximum number of results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the zero-vector policy.
    pub fn with_zero_vector_policy(mut self, policy: ZeroVectorPolicy) -> Self {
        self.zero_vector_policy = policy;
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            zero_vector_policy: ZeroVectorPolicy::default(),
        }
    }
}

/// Handling of zero-magnitude embeddings, for which cosine similarity is
/// undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVectorPolicy {
    /// Abort the run with a degenerate-vector error.
    #[default]
    Reject,
    /// Drop jobs whose stored embedding has zero magnitude. A zero student
    /// vector still aborts the run.
    Exclude,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.zero_vector_policy, ZeroVectorPolicy::Reject);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{ "zero_vector_policy": "exclude" }"#).unwrap();
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.zero_vector_policy, ZeroVectorPolicy::Exclude);
    }
}
