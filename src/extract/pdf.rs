//! PDF text extraction via pdf-extract.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::model::SourceText;

/// Extract per-page plain text from a PDF file.
///
/// # Example
///
/// ```no_run
/// use repara::extract::extract_pages;
///
/// let source = extract_pages("report.pdf")?;
/// println!("{} pages", source.page_count());
/// # Ok::<(), repara::Error>(())
/// ```
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<SourceText> {
    let path = path.as_ref();
    let pages = pdf_extract::extract_text_by_pages(path)?;
    debug!("extracted {} page(s) from {}", pages.len(), path.display());
    Ok(SourceText::from_pages(pages))
}

/// Extract per-page plain text from in-memory PDF data.
pub fn extract_pages_from_bytes(data: &[u8]) -> Result<SourceText> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)?;
    Ok(SourceText::from_pages(pages))
}
