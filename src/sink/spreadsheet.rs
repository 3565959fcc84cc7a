//! Spreadsheet output: one worksheet per document, one paragraph per row.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::Paragraph;

use super::ParagraphSink;

// Worksheet name limits imposed by the xlsx format.
const SHEET_NAME_MAX: usize = 31;
const SHEET_NAME_ILLEGAL: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Writes every document into a single workbook, one worksheet per
/// document named after it, each paragraph in its own row of the first
/// column. Nothing touches disk until [`finish`](ParagraphSink::finish).
pub struct SpreadsheetSink {
    workbook: Workbook,
    path: PathBuf,
    used_names: HashSet<String>,
}

impl SpreadsheetSink {
    /// Create a sink that will save the workbook to `path`.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            workbook: Workbook::new(),
            path: path.into(),
            used_names: HashSet::new(),
        }
    }

    /// The path the workbook will be saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unique_sheet_name(&mut self, name: &str) -> String {
        let base = sanitize_sheet_name(name);
        let mut candidate = base.clone();
        let mut n = 2;
        // Worksheet names are case-insensitive unique.
        while !self.used_names.insert(candidate.to_lowercase()) {
            let suffix = format!(" ({n})");
            candidate = format!("{}{}", truncate(&base, SHEET_NAME_MAX - suffix.len()), suffix);
            n += 1;
        }
        candidate
    }
}

impl ParagraphSink for SpreadsheetSink {
    fn write_document(&mut self, name: &str, paragraphs: &[Paragraph]) -> Result<()> {
        let sheet_name = self.unique_sheet_name(name);
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;

        for (row, paragraph) in paragraphs.iter().enumerate() {
            worksheet.write_string(row as u32, 0, paragraph.text.as_str())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.workbook.save(&self.path)?;
        Ok(())
    }
}

/// Replace characters the format rejects and truncate to the 31-character
/// worksheet-name limit.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if SHEET_NAME_ILLEGAL.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return "Document".to_string();
    }
    truncate(cleaned, SHEET_NAME_MAX)
}

fn truncate(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect::<String>().trim_end().to_string()
}
