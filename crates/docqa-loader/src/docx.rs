use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use docqa_core::traits::TextExtractor;

use crate::error::LoadError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from the main document part of a `.docx` package.
///
/// Non-empty paragraphs are joined with `\n`; tabs and explicit breaks inside a
/// paragraph become `\t` and `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn read(path: &Path) -> Result<String, LoadError> {
        let docx_err = |message: String| LoadError::Docx { path: path.to_path_buf(), message };
        let mut archive = zip::ZipArchive::new(File::open(path)?).map_err(|e| docx_err(e.to_string()))?;
        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| docx_err(format!("{DOCUMENT_PART}: {e}")))?
            .read_to_string(&mut xml)?;
        paragraphs_from_xml(&xml).map_err(docx_err)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> anyhow::Result<String> { Ok(Self::read(path)?) }
}

/// Collects the text runs (`w:t`) of each paragraph (`w:p`) in document order.
pub fn paragraphs_from_xml(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => current.push('\t'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => current.push('\n'),
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("malformed XML at byte {}: {e}", reader.buffer_position())),
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs.join("\n"))
}
