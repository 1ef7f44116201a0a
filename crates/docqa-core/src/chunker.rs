//! Sliding-window text segmentation.
//!
//! Windows are measured in characters (Unicode scalar values), so multi-byte
//! text is never split inside a code point.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_OVERLAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, overlap: DEFAULT_OVERLAP }
    }
}

impl ChunkingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::invalid_config("chunk_size must be greater than zero"));
        }
        if self.overlap >= self.chunk_size {
            return Err(Error::invalid_config(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Splits text into overlapping, whitespace-trimmed windows.
///
/// A `Chunker` can only be obtained through [`Chunker::new`], which rejects
/// settings whose step (`chunk_size - overlap`) would not advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        Self::from_config(ChunkingConfig { chunk_size, overlap })
    }

    pub fn from_config(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn chunk_size(&self) -> usize { self.config.chunk_size }

    pub fn overlap(&self) -> usize { self.config.overlap }

    fn step(&self) -> usize { self.config.chunk_size - self.config.overlap }

    pub fn split(&self, text: &str) -> Vec<String> {
        // Byte offset of every char boundary, including the end of the text.
        let bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len())).collect();
        let char_len = bounds.len() - 1;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < char_len {
            let end = start.saturating_add(self.config.chunk_size).min(char_len);
            let window = text[bounds[start]..bounds[end]].trim();
            if !window.is_empty() {
                chunks.push(window.to_string());
            }
            start = start.saturating_add(self.step());
        }
        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self { Self { config: ChunkingConfig::default() } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_counted_in_chars() {
        let chunker = Chunker::new(3, 1).expect("chunker");
        let chunks = chunker.split("привет");
        assert_eq!(chunks, vec!["при", "иве", "ет"]);
    }

    #[test]
    fn whitespace_only_windows_are_dropped() {
        let chunker = Chunker::new(4, 0).expect("chunker");
        assert_eq!(chunker.split("ab      cd"), vec!["ab", "cd"]);
    }

    #[test]
    fn default_is_500_with_50_overlap() {
        let chunker = Chunker::default();
        assert_eq!((chunker.chunk_size(), chunker.overlap()), (500, 50));
    }
}
