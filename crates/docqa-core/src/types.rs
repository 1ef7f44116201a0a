//! Domain types shared by the chunker, the vector index and the assistant.

use serde::{Deserialize, Serialize};

/// Dense embedding of a piece of text. Its length is fixed by the embedder.
pub type Vector = Vec<f32>;

/// A trimmed window of a source document.
///
/// - `text`: the window content after whitespace trimming
/// - `position`: 0-based insertion order across one indexing call
/// - `source`: path of the document the window came from (empty for raw text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub position: usize,
    #[serde(default)]
    pub source: String,
}

impl Chunk {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self { text: text.into(), position, source: String::new() }
    }

    pub fn with_source(text: impl Into<String>, position: usize, source: impl Into<String>) -> Self {
        Self { text: text.into(), position, source: source.into() }
    }

    /// Numbers a sequence of texts `0..n` in iteration order.
    pub fn sequence<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().enumerate().map(|(position, text)| Self::new(text, position)).collect()
    }
}

/// A chunk paired with its cosine similarity to the query. Higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub chunk: Chunk,
    pub score: f32,
}
