use std::path::Path;

use lopdf::Document;
use tracing::debug;

use docqa_core::traits::TextExtractor;

use crate::error::LoadError;

/// Concatenates the embedded text of every page, one page per line block.
///
/// Pages whose text cannot be decoded or is empty are skipped. Scanned PDFs
/// without a text layer therefore yield an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn read(path: &Path) -> Result<String, LoadError> {
        let doc = Document::load(path).map_err(|e| LoadError::Pdf { path: path.to_path_buf(), message: e.to_string() })?;
        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page in &page_numbers {
            match doc.extract_text(&[*page]) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => debug!(page = *page, error = %e, "skipping undecodable PDF page"),
            }
        }
        debug!(path = %path.display(), pages = page_numbers.len(), with_text = pages.len(), "extracted PDF");
        Ok(pages.join("\n"))
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> anyhow::Result<String> { Ok(Self::read(path)?) }
}
