//! Similarity computation for embeddings.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{EmbeddingError, Result};

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite vectors
///
/// Components are widened to f64 before accumulating. Zero-magnitude input
/// has no direction, so it is rejected with
/// [`EmbeddingError::DegenerateVector`] instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot = a.iter().zip(b.iter()).fold(0.0_f64, |acc, (&x, &y)| {
        f64::from(x).mul_add(f64::from(y), acc)
    });

    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 {
        return Err(EmbeddingError::DegenerateVector);
    }

    let similarity = dot / denom;
    if !similarity.is_finite() {
        return Err(EmbeddingError::DegenerateVector);
    }

    Ok(similarity.clamp(-1.0, 1.0))
}

/// Euclidean length of an embedding, accumulated in f64.
///
/// This is the norm [`cosine_similarity`] divides by, so an embedding with
/// a magnitude of exactly zero is the one it rejects as degenerate.
pub fn magnitude(embedding: &[f32]) -> f64 {
    embedding
        .iter()
        .map(|&x| f64::from(x))
        .fold(0.0_f64, |acc, x| x.mul_add(x, acc))
        .sqrt()
}

/// A candidate paired with its similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scored<T> {
    /// The scored candidate.
    pub item: T,

    /// Cosine similarity to the query.
    pub similarity: f64,
}

/// Score every candidate against `query` and keep the best `k`.
///
/// Results are sorted by similarity, highest first. The sort is stable, so
/// candidates with exactly equal scores keep their input order. The first
/// scoring failure aborts the whole ranking.
pub fn rank_top_k<T, F>(
    query: &[f32],
    candidates: Vec<T>,
    embedding_of: F,
    k: usize,
) -> Result<Vec<Scored<T>>>
where
    F: Fn(&T) -> &[f32],
{
    let mut scored = Vec::with_capacity(candidates.len());
    for item in candidates {
        let similarity = cosine_similarity(query, embedding_of(&item))?;
        scored.push(Scored { item, similarity });
    }

    scored.sort_by_key(|s| Reverse(OrderedFloat(s.similarity)));
    scored.truncate(k);

    Ok(scored)
}
