//! Format-specific text extraction behind the `TextExtractor` capability.
//!
//! [`ExtractorRegistry`] dispatches on the (case-insensitive) file extension;
//! new formats are added with [`ExtractorRegistry::register`].
pub mod discover;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod plain;
pub mod registry;

pub use discover::discover;
pub use docx::DocxExtractor;
pub use error::LoadError;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;
pub use registry::ExtractorRegistry;
