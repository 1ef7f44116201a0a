//! Document question answering over an in-memory vector index.
//!
//! [`DocumentAssistant`] wires the pipeline together:
//! - indexing: extract → chunk → embed (one batch) → replace the index
//! - answering: embed query → rank → render prompt → generate
//!
//! The index lives in an explicit [`IndexState`]; answering before the first
//! successful indexing call fails with `Error::NotIndexed`.
mod assistant;
mod state;

pub use assistant::DocumentAssistant;
pub use state::IndexState;

pub use docqa_core::config::AssistantSettings;
pub use docqa_core::error::{Error, Result};
