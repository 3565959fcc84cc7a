//! Source-document text extraction adapters.
//!
//! Adapters produce a [`SourceText`](crate::model::SourceText) for the
//! engine to consume; everything downstream of extraction is pure.

mod pdf;

pub use pdf::{extract_pages, extract_pages_from_bytes};
