//! # repara
//!
//! Reconstructs numbered paragraphs from PDF-extracted text.
//!
//! Text pulled out of a PDF carries the layout's line breaks, not the
//! document's: paragraphs wrap mid-sentence, pages cut paragraphs in
//! half, and a multi-digit paragraph number that lands on a wrap point
//! can come out one digit per line. For documents written in the
//! numbered-paragraph convention ("21. The Committee recommends..."),
//! repara repairs the broken numbering and re-joins the wrapped lines,
//! recovering the original paragraph sequence.
//!
//! ## Quick Start
//!
//! ```
//! use repara::reconstruct;
//!
//! let paragraphs = reconstruct("8\n9. Recommends action.\n10. Further notes.");
//! assert_eq!(paragraphs[0].text, "89. Recommends action.");
//! assert_eq!(paragraphs[0].marker, Some(89));
//! assert_eq!(paragraphs[1].text, "10. Further notes.");
//! ```
//!
//! Reading straight from a PDF:
//!
//! ```no_run
//! use repara::reconstruct_file;
//!
//! fn main() -> repara::Result<()> {
//!     for paragraph in reconstruct_file("report.pdf")? {
//!         println!("{}", paragraph);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Digit-split repair**: line-level and pattern-level repair of
//!   paragraph numbers broken across lines
//! - **Wrap-aware merging**: line breaks inside a paragraph become
//!   spaces; intentional breaks survive
//! - **Multiple output formats**: spreadsheet (one sheet per document),
//!   word-processor documents, JSON
//! - **Batch conversion**: whole directories, in parallel, with
//!   per-document failure reporting
//!
//! The engine itself is a pure text transformation — total over all
//! inputs, no I/O, no error cases. Extraction and output live in the
//! `extract`, `sink`, and `convert` modules around it.

pub mod convert;
pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod sink;

// Re-export commonly used types
pub use convert::{convert_dir, convert_file, BatchOptions, BatchReport, DocumentFailure};
pub use engine::{ReconstructOptions, Reconstructor, SegmentStrategy};
pub use error::{Error, Result};
pub use model::{Paragraph, SourceText};
pub use sink::{JsonSink, OutputFormat, ParagraphSink, SpreadsheetSink, WordSink};

use std::path::Path;

/// Reconstruct the paragraphs of raw extracted text with default options.
///
/// # Example
///
/// ```
/// use repara::reconstruct;
///
/// let paragraphs = reconstruct("Executive Summary\n1. First point.");
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].marker, None);
/// ```
pub fn reconstruct(text: &str) -> Vec<Paragraph> {
    Reconstructor::default().reconstruct_text(text)
}

/// Reconstruct the paragraphs of raw extracted text with custom options.
///
/// # Example
///
/// ```
/// use repara::{reconstruct_with_options, ReconstructOptions};
///
/// let options = ReconstructOptions::blank_lines();
/// let paragraphs = reconstruct_with_options("One block.\n\nAnother block.", &options);
/// assert_eq!(paragraphs.len(), 2);
/// ```
pub fn reconstruct_with_options(text: &str, options: &ReconstructOptions) -> Vec<Paragraph> {
    Reconstructor::new(options.clone()).reconstruct_text(text)
}

/// Extract a PDF's text and reconstruct its paragraphs.
///
/// # Example
///
/// ```no_run
/// use repara::reconstruct_file;
///
/// let paragraphs = reconstruct_file("report.pdf").unwrap();
/// println!("{} paragraphs", paragraphs.len());
/// ```
pub fn reconstruct_file<P: AsRef<Path>>(path: P) -> Result<Vec<Paragraph>> {
    reconstruct_file_with_options(path, &ReconstructOptions::default())
}

/// Extract a PDF's text and reconstruct its paragraphs with custom options.
pub fn reconstruct_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ReconstructOptions,
) -> Result<Vec<Paragraph>> {
    let source = extract::extract_pages(path)?;
    Ok(Reconstructor::new(options.clone()).reconstruct(&source))
}
