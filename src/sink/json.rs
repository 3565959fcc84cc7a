//! JSON output: every document's paragraphs in one ordered array.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::model::Paragraph;

use super::ParagraphSink;

/// One document's entry in the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Document name (source file stem).
    pub document: String,

    /// Reconstructed paragraphs, in source order.
    pub paragraphs: Vec<Paragraph>,
}

/// Accumulates every document and serializes the whole batch on finish.
pub struct JsonSink {
    path: PathBuf,
    pretty: bool,
    documents: Vec<DocumentRecord>,
}

impl JsonSink {
    /// Create a sink that will write pretty-printed JSON to `path`.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            documents: Vec::new(),
        }
    }

    /// Emit compact JSON instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// The path the JSON file will be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParagraphSink for JsonSink {
    fn write_document(&mut self, name: &str, paragraphs: &[Paragraph]) -> Result<()> {
        self.documents.push(DocumentRecord {
            document: name.to_string(),
            paragraphs: paragraphs.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let file = BufWriter::new(File::create(&self.path)?);
        if self.pretty {
            serde_json::to_writer_pretty(file, &self.documents)?;
        } else {
            serde_json::to_writer(file, &self.documents)?;
        }
        Ok(())
    }
}
