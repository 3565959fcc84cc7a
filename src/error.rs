//! Error types for the repara library.

use std::io;
use thiserror::Error;

/// Result type alias for repara operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or writing documents.
///
/// The reconstruction engine itself is total over all string inputs and
/// never produces an error; everything here belongs to the I/O adapters
/// around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error extracting text content from a source document.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error writing the spreadsheet output.
    #[error("Spreadsheet output error: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),

    /// Error writing a word-processor output file.
    #[error("Word output error: {0}")]
    DocWrite(String),

    /// Error serializing JSON output.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// The batch input path is not a readable directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TextExtract("bad stream".into());
        assert_eq!(err.to_string(), "Text extraction error: bad stream");

        let err = Error::NotADirectory("reports.pdf".into());
        assert_eq!(err.to_string(), "Not a directory: reports.pdf");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
