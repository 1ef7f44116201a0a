use std::path::{Path, PathBuf};

use tracing::info;

use docqa_core::traits::TextExtractor;

use crate::error::LoadError;

/// Files under `root` (recursively) that `extractor` supports, sorted by path.
///
/// Unreadable directory entries are skipped. A missing `root` is an error.
pub fn discover(root: &Path, extractor: &dyn TextExtractor) -> Result<Vec<PathBuf>, LoadError> {
    if !root.exists() { return Err(LoadError::NotFound(root.to_path_buf())); }
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && extractor.supports(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    info!(root = %root.display(), files = files.len(), "discovered documents");
    Ok(files)
}
