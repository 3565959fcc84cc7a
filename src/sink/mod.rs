//! Output sinks: one writer per destination format.
//!
//! A sink consumes ordered paragraph sequences, one call per source
//! document, then finishes. The engine knows nothing about any of them.

mod json;
mod spreadsheet;
mod word;

pub use json::{DocumentRecord, JsonSink};
pub use spreadsheet::SpreadsheetSink;
pub use word::WordSink;

use std::path::Path;

use crate::error::Result;
use crate::model::Paragraph;

/// Destination format for reconstructed paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One workbook, one worksheet per document, one paragraph per row.
    #[default]
    Spreadsheet,

    /// One word-processor document per source document.
    Word,

    /// One JSON file holding every document's paragraphs.
    Json,
}

impl OutputFormat {
    /// File extension for the format's primary output.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Spreadsheet => "xlsx",
            OutputFormat::Word => "docx",
            OutputFormat::Json => "json",
        }
    }

    /// Whether the format writes one file per document (vs a single file).
    pub fn writes_per_document(&self) -> bool {
        matches!(self, OutputFormat::Word)
    }
}

/// A writer for reconstructed paragraph sequences.
///
/// `write_document` is called once per source document, in source order;
/// `finish` flushes whatever the sink has accumulated. Sinks that write
/// one file per document do their I/O in `write_document` and make
/// `finish` a no-op.
pub trait ParagraphSink {
    /// Write one document's paragraphs under the given document name.
    fn write_document(&mut self, name: &str, paragraphs: &[Paragraph]) -> Result<()>;

    /// Flush accumulated output.
    fn finish(&mut self) -> Result<()>;
}

/// Build the sink for a format, writing to `output` (a file path for
/// single-file formats, a directory for per-document formats).
pub fn make_sink(format: OutputFormat, output: &Path) -> Result<Box<dyn ParagraphSink>> {
    Ok(match format {
        OutputFormat::Spreadsheet => Box::new(SpreadsheetSink::create(output)),
        OutputFormat::Word => Box::new(WordSink::create(output)?),
        OutputFormat::Json => Box::new(JsonSink::create(output)),
    })
}
