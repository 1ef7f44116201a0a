use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("Failed to read DOCX {}: {message}", path.display())]
    Docx { path: PathBuf, message: String },
}
