// file: src/extractor/mod.rs
// description: text extraction module exports
// reference: internal module structure

pub mod pdf;

pub use pdf::PdfTextExtractor;
