// file: src/exporter/mod.rs
// description: output writers

pub mod text;

pub use text::TextExporter;
