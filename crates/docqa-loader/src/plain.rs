use std::fs;
use std::path::Path;

use docqa_core::traits::TextExtractor;

use crate::error::LoadError;

/// Reads `.txt` files, falling back to lossy UTF-8 for invalid byte sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn read(path: &Path) -> Result<String, LoadError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> anyhow::Result<String> { Ok(Self::read(path)?) }
}
