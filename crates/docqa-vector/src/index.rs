use anyhow::anyhow;
use tracing::debug;

use docqa_core::error::{Error, Result};
use docqa_core::traits::Embedder;
use docqa_core::types::{Chunk, Vector};

/// Chunks and their embeddings, aligned by offset.
///
/// Invariants: `chunks.len() == vectors.len()` and every vector has length
/// `dim`. `Index::default()` is the empty, not-yet-built index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    chunks: Vec<Chunk>,
    vectors: Vec<Vector>,
    dim: usize,
}

impl Index {
    /// Embeds every chunk in one batch call and pairs chunk `i` with vector `i`.
    pub fn build(chunks: Vec<Chunk>, embedder: &dyn Embedder) -> Result<Self> {
        if chunks.is_empty() { return Err(Error::EmptyCorpus); }
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = embedder.embed_batch(&texts)?;
        debug!(chunks = chunks.len(), dim = embedder.dim(), "embedded index batch");
        Self::from_parts(chunks, vectors, embedder.dim())
    }

    /// Assembles an index from precomputed embeddings, checking alignment.
    pub fn from_parts(chunks: Vec<Chunk>, vectors: Vec<Vector>, dim: usize) -> Result<Self> {
        if chunks.is_empty() { return Err(Error::EmptyCorpus); }
        if dim == 0 { return Err(Error::invalid_config("embedding dimension must be greater than zero")); }
        if vectors.len() != chunks.len() {
            return Err(Error::Upstream(anyhow!(
                "embedder returned {} vectors for {} chunks",
                vectors.len(),
                chunks.len()
            )));
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dim) {
            return Err(Error::DimensionMismatch { expected: dim, actual: bad.len() });
        }
        Ok(Self { chunks, vectors, dim })
    }

    pub fn len(&self) -> usize { self.chunks.len() }

    pub fn is_empty(&self) -> bool { self.chunks.is_empty() }

    /// Vector dimensionality; `0` for an empty index.
    pub fn dim(&self) -> usize { self.dim }

    pub fn chunks(&self) -> &[Chunk] { &self.chunks }

    pub fn vectors(&self) -> &[Vector] { &self.vectors }

    pub fn entries(&self) -> impl Iterator<Item = (&Chunk, &Vector)> + '_ {
        self.chunks.iter().zip(self.vectors.iter())
    }
}
