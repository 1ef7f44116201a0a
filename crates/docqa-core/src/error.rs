//! Error kinds surfaced by chunking, indexing, retrieval and the assistant.
//!
//! Capability failures are wrapped in [`Error::Upstream`] without rewording so
//! callers can still downcast to the concrete error (e.g. a loader's `LoadError`).
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No text chunks were created from the supplied documents")]
    EmptyCorpus,

    #[error("Documents are not indexed")]
    NotIndexed,

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Upstream(anyhow::Error),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self { Self::InvalidConfig(msg.into()) }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self { Self::Upstream(err) }
}

pub type Result<T> = std::result::Result<T, Error>;
