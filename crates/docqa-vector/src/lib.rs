//! In-memory vector index and cosine-similarity retrieval.
//!
//! An [`Index`] is built once from a batch of chunks and never mutated; the
//! [`Retriever`] ranks its chunks against a query vector.
pub mod index;
pub mod search;

pub use index::Index;
pub use search::{cosine_similarity, search, Retriever};
