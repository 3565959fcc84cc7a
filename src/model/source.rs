//! Raw extracted text, one unit per source page.

use serde::{Deserialize, Serialize};

/// Raw text extracted from one source document, kept as an ordered
/// sequence of per-page strings.
///
/// Page boundaries matter only as candidate paragraph-break positions; a
/// document whose extractor cannot report pages is represented as a single
/// page. The text is never mutated in place — the engine reads it once and
/// produces new strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    pages: Vec<String>,
}

impl SourceText {
    /// Create an empty source (zero pages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from per-page strings.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Create a single-page source from already-joined text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            pages: vec![text.into()],
        }
    }

    /// Append a page.
    pub fn push_page(&mut self, page: impl Into<String>) {
        self.pages.push(page.into());
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the source has no pages at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The per-page strings, in source order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Join all pages with the given separator.
    pub fn joined(&self, separator: &str) -> String {
        self.pages.join(separator)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl FromIterator<String> for SourceText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}
