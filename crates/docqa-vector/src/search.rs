use tracing::debug;

use docqa_core::error::{Error, Result};
use docqa_core::types::RetrievalResult;

use crate::index::Index;

/// Cosine of the angle between `a` and `b`; `0.0` when either has zero magnitude
/// or a non-finite component.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, na, nb), (x, y)| (d + x * y, na + x * x, nb + y * y));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(-1.0, 1.0)
}

/// Exhaustive cosine ranking over an [`Index`].
///
/// Results are ordered by score descending; equal scores keep the earlier
/// chunk (smaller `position`) first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Retriever {
    min_score: Option<f32>,
}

impl Retriever {
    pub fn new() -> Self { Self::default() }

    /// Drop results scoring below `min_score` after ranking.
    pub fn with_min_score(min_score: Option<f32>) -> Self { Self { min_score } }

    pub fn search(&self, query: &[f32], index: &Index, top_k: usize) -> Result<Vec<RetrievalResult>> {
        if index.is_empty() { return Err(Error::NotIndexed); }
        if top_k == 0 { return Err(Error::invalid_config("top_k must be greater than zero")); }
        if query.len() != index.dim() {
            return Err(Error::DimensionMismatch { expected: index.dim(), actual: query.len() });
        }

        let mut scored: Vec<(usize, f32)> = index
            .vectors()
            .iter()
            .enumerate()
            .map(|(i, v)| (i, cosine_similarity(query, v)))
            .collect();
        let chunks = index.chunks();
        scored.sort_by(|&(ia, sa), &(ib, sb)| {
            sb.total_cmp(&sa).then_with(|| chunks[ia].position.cmp(&chunks[ib].position))
        });

        let results: Vec<RetrievalResult> = scored
            .into_iter()
            .take(top_k)
            .filter(|&(_, score)| self.min_score.map_or(true, |min| score >= min))
            .map(|(i, score)| RetrievalResult { chunk: chunks[i].clone(), score })
            .collect();
        debug!(
            candidates = index.len(),
            returned = results.len(),
            top_score = results.first().map(|r| r.score),
            "ranked index"
        );
        Ok(results)
    }
}

/// Ranks `index` against `query` with no score threshold.
pub fn search(query: &[f32], index: &Index, top_k: usize) -> Result<Vec<RetrievalResult>> {
    Retriever::new().search(query, index, top_k)
}

