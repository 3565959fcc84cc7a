//! Value types shared by the engine and its adapters.

mod paragraph;
mod source;

pub use paragraph::Paragraph;
pub use source::SourceText;
