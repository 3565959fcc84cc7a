//! Batch conversion: a directory of PDFs in, one sink out.
//!
//! This is the orchestration layer the engine itself stays out of:
//! directory scanning, cross-document parallelism, and per-document
//! failure reporting. A document that cannot be extracted or written is
//! recorded and logged, and never aborts the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use crate::engine::{ReconstructOptions, Reconstructor};
use crate::error::{Error, Result};
use crate::extract::extract_pages;
use crate::model::Paragraph;
use crate::sink::{make_sink, OutputFormat, ParagraphSink};

/// Options for a batch conversion run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Engine options applied to every document.
    pub reconstruct: ReconstructOptions,

    /// Destination format.
    pub format: OutputFormat,

    /// Reconstruct documents in parallel.
    pub parallel: bool,
}

impl BatchOptions {
    /// Create batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the engine options.
    pub fn with_reconstruct(mut self, options: ReconstructOptions) -> Self {
        self.reconstruct = options;
        self
    }

    /// Disable cross-document parallelism.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            reconstruct: ReconstructOptions::default(),
            format: OutputFormat::default(),
            parallel: true,
        }
    }
}

/// A document that could not be converted.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// Path of the source document.
    pub path: PathBuf,

    /// Why it failed.
    pub reason: String,
}

/// Outcome of a batch conversion run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of documents converted and written.
    pub converted: usize,

    /// Documents that failed, in source order.
    pub failures: Vec<DocumentFailure>,

    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
}

impl BatchReport {
    /// Total number of documents attempted.
    pub fn total(&self) -> usize {
        self.converted + self.failures.len()
    }

    /// Whether every attempted document converted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// List the PDF files directly inside `dir`, sorted by name.
///
/// The extension match is case-insensitive; subdirectories and other
/// files are ignored.
pub fn pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_pdf_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Convert every PDF in `input_dir`, writing to `output` (a file path for
/// single-file formats, a directory for per-document formats).
pub fn convert_dir(input_dir: &Path, output: &Path, options: &BatchOptions) -> Result<BatchReport> {
    let files = pdf_files(input_dir)?;
    let mut sink = make_sink(options.format, output)?;
    convert_files(&files, sink.as_mut(), options)
}

/// Convert an explicit list of files into an already-built sink.
///
/// Reconstruction runs in parallel across documents when the options ask
/// for it; the sink is always driven sequentially, in source order.
pub fn convert_files(
    files: &[PathBuf],
    sink: &mut dyn ParagraphSink,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let start = Instant::now();
    let engine = Reconstructor::new(options.reconstruct.clone());

    let results: Vec<Result<Vec<Paragraph>>> = if options.parallel {
        files
            .par_iter()
            .map(|path| reconstruct_one(path, &engine))
            .collect()
    } else {
        files
            .iter()
            .map(|path| reconstruct_one(path, &engine))
            .collect()
    };

    let mut report = BatchReport::default();
    for (path, result) in files.iter().zip(results) {
        let outcome =
            result.and_then(|paragraphs| sink.write_document(&document_name(path), &paragraphs));
        match outcome {
            Ok(()) => {
                report.converted += 1;
                info!("converted {}", path.display());
            }
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                report.failures.push(DocumentFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    sink.finish()?;
    report.elapsed = start.elapsed();
    Ok(report)
}

/// Convert a single PDF file, writing to `output`.
pub fn convert_file(input: &Path, output: &Path, options: &BatchOptions) -> Result<()> {
    let source = extract_pages(input)?;
    let engine = Reconstructor::new(options.reconstruct.clone());
    let paragraphs = engine.reconstruct(&source);

    let mut sink = make_sink(options.format, output)?;
    sink.write_document(&document_name(input), &paragraphs)?;
    sink.finish()
}

fn reconstruct_one(path: &Path, engine: &Reconstructor) -> Result<Vec<Paragraph>> {
    let source = extract_pages(path)?;
    Ok(engine.reconstruct(&source))
}

/// Document name used for sheet titles and output file stems.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
