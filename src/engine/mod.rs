//! The paragraph reconstruction engine.
//!
//! PDF text extraction yields line breaks that track page layout, not
//! paragraph structure: paragraphs wrap mid-sentence, and a multi-digit
//! paragraph number that lands on a line-wrap point can be split one digit
//! per line. This module undoes those artifacts and recovers the original
//! sequence of numbered paragraphs.

mod options;
mod pipeline;

pub use options::{ReconstructOptions, SegmentStrategy};
pub use pipeline::Reconstructor;
