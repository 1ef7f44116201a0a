//! Capabilities the pipeline consumes but does not implement.
//!
//! All three return `anyhow::Result` so implementations can surface whatever
//! error type their backend produces; the assistant forwards it unchanged.
use std::path::Path;

use crate::types::Vector;

pub trait Embedder: Send + Sync {
    /// Dimensionality of every vector this embedder returns.
    fn dim(&self) -> usize;
    /// One vector per input text, in input order.
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vector>>;
}

pub trait Generator: Send + Sync {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> anyhow::Result<String>;

    /// Whether `extract` can handle this path. Used when scanning directories.
    fn supports(&self, _path: &Path) -> bool { true }
}

