//! Word-processor output: one .docx per document, one block per paragraph.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph as DocxParagraph, Run};

use crate::error::{Error, Result};
use crate::model::Paragraph;

use super::ParagraphSink;

/// Writes each document as `<name>.docx` inside an output directory, with
/// every reconstructed paragraph appended as one paragraph block.
pub struct WordSink {
    dir: PathBuf,
}

impl WordSink {
    /// Create a sink writing into `dir`, creating the directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ParagraphSink for WordSink {
    fn write_document(&mut self, name: &str, paragraphs: &[Paragraph]) -> Result<()> {
        let mut docx = Docx::new();
        for paragraph in paragraphs {
            docx = docx
                .add_paragraph(DocxParagraph::new().add_run(Run::new().add_text(&paragraph.text)));
        }

        let path = self.dir.join(format!("{name}.docx"));
        let file = File::create(&path)?;
        docx.build()
            .pack(file)
            .map_err(|e| Error::DocWrite(e.to_string()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
