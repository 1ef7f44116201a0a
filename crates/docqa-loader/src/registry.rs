use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use docqa_core::traits::TextExtractor;

use crate::discover::discover;
use crate::docx::DocxExtractor;
use crate::error::LoadError;
use crate::pdf::PdfExtractor;
use crate::plain::PlainTextExtractor;

/// Maps lower-case file extensions (without the dot) to extractors.
///
/// The registry is itself a [`TextExtractor`]: it checks that the path exists,
/// picks the extractor for its extension and delegates.
#[derive(Default)]
pub struct ExtractorRegistry {
    by_extension: BTreeMap<String, Box<dyn TextExtractor>>,
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry").field("extensions", &self.extensions()).finish()
    }
}

impl ExtractorRegistry {
    pub fn new() -> Self { Self::default() }

    /// Registry preloaded with `txt`, `pdf` and `docx` support.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("txt", PlainTextExtractor);
        registry.register("pdf", PdfExtractor);
        registry.register("docx", DocxExtractor);
        registry
    }

    /// Adds or replaces the extractor for `extension` (leading dot optional).
    pub fn register(&mut self, extension: &str, extractor: impl TextExtractor + 'static) -> &mut Self {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.by_extension.insert(key, Box::new(extractor));
        self
    }

    pub fn extensions(&self) -> Vec<&str> { self.by_extension.keys().map(String::as_str).collect() }

    fn lookup(&self, path: &Path) -> Option<&dyn TextExtractor> {
        let ext = extension_of(path)?;
        self.by_extension.get(&ext).map(|b| &**b)
    }

    /// Every supported file under `root`, recursively, sorted by path.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, LoadError> { discover(root, self) }

    pub fn load(&self, path: &Path) -> anyhow::Result<String> {
        if !path.exists() { return Err(LoadError::NotFound(path.to_path_buf()).into()); }
        let extractor = self.lookup(path).ok_or_else(|| {
            LoadError::UnsupportedFormat(extension_of(path).map_or_else(|| "<none>".to_string(), |e| format!(".{e}")))
        })?;
        let text = extractor.extract(path)?;
        debug!(path = %path.display(), chars = text.chars().count(), "extracted document");
        Ok(text)
    }
}

impl TextExtractor for ExtractorRegistry {
    fn extract(&self, path: &Path) -> anyhow::Result<String> { self.load(path) }

    fn supports(&self, path: &Path) -> bool { self.lookup(path).is_some() }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_lowercase)
}
