//! Reconstructed paragraph type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Leading marker shape: 1-3 digits, a period, then whitespace or end of text.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3})\.(\s|$)").expect("marker regex"));

/// A single reconstructed paragraph.
///
/// `text` is the full paragraph — numeric marker prefix included — with all
/// line breaks replaced by spaces, whitespace runs collapsed, and the ends
/// trimmed. `marker` is the located paragraph number, or `None` for front
/// matter preceding the first numbered paragraph.
///
/// The marker is located, not validated: the engine never renumbers and
/// never checks that markers increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Located paragraph number, if the text starts with a marker.
    pub marker: Option<u32>,

    /// Full paragraph text, marker included.
    pub text: String,
}

impl Paragraph {
    /// Build a paragraph from cleaned text, locating its leading marker.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let marker = MARKER
            .captures(&text)
            .and_then(|caps| caps[1].parse().ok());
        Self { marker, text }
    }

    /// Whether this paragraph carries a numeric marker.
    pub fn is_numbered(&self) -> bool {
        self.marker.is_some()
    }

    /// The paragraph body with the marker prefix stripped.
    pub fn body(&self) -> &str {
        match MARKER.find(&self.text) {
            Some(m) => self.text[m.end()..].trim_start(),
            None => &self.text,
        }
    }

    /// Check if the paragraph text is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
