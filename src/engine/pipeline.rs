//! Staged reconstruction pipeline.

use log::debug;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::{ReconstructOptions, SegmentStrategy};
use crate::model::{Paragraph, SourceText};

/// Paragraph reconstruction engine.
///
/// Applies an ordered pipeline of pure text stages: repair digit-split
/// markers, merge wrapped lines, normalize whitespace, segment into
/// paragraphs. Total over all inputs — text without recognizable markers
/// comes back as a single paragraph, whitespace-only input as an empty
/// sequence.
///
/// Stage order is load-bearing: marker repair must see the literal line
/// breaks that identify isolated digit lines, so it always runs before
/// line merging.
///
/// # Example
///
/// ```
/// use repara::engine::Reconstructor;
///
/// let engine = Reconstructor::default();
/// let paragraphs = engine.reconstruct_text("8\n9. Recommends action.\n10. Further notes.");
/// assert_eq!(paragraphs[0].text, "89. Recommends action.");
/// assert_eq!(paragraphs[1].text, "10. Further notes.");
/// ```
pub struct Reconstructor {
    options: ReconstructOptions,
    numbered_line: Regex,
    digit_triple: Regex,
    digit_pair: Regex,
    para_break: Regex,
    blank_line: Regex,
    control: Regex,
    whitespace: Regex,
    marker: Regex,
}

impl Reconstructor {
    /// Create an engine with the given options.
    pub fn new(options: ReconstructOptions) -> Self {
        Self {
            options,
            numbered_line: Regex::new(r"^([0-9]+)\.(.*)").unwrap(),
            digit_triple: Regex::new(r"[0-9]\n[0-9]\n[0-9]\.").unwrap(),
            digit_pair: Regex::new(r"[0-9]\n[0-9]\.").unwrap(),
            para_break: Regex::new(r"\n{2,}").unwrap(),
            blank_line: Regex::new(r"\n\s*\n").unwrap(),
            control: Regex::new(r"[\x00-\x1F\x7F]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            marker: Regex::new(r"[0-9]{1,3}\.\s").unwrap(),
        }
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &ReconstructOptions {
        &self.options
    }

    /// Reconstruct the paragraphs of a multi-page source.
    ///
    /// Pages are joined with the segmentation strategy's separator; under
    /// the default strategy a page boundary is a soft break, merged like
    /// any other line break.
    pub fn reconstruct(&self, source: &SourceText) -> Vec<Paragraph> {
        let text = source.joined(self.options.segmentation.page_separator());
        self.reconstruct_text(&text)
    }

    /// Reconstruct the paragraphs of already-joined raw text.
    pub fn reconstruct_text(&self, text: &str) -> Vec<Paragraph> {
        let mut text = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.repair_split_markers {
            text = self.repair_digit_lines(&text);
            text = self.repair_digit_runs(&text);
        }

        let paragraphs = match self.options.segmentation {
            SegmentStrategy::Markers => {
                let merged = self.merge_wrapped_lines(&text);
                let cleaned = self.normalize_whitespace(&merged);
                self.segment_at_markers(&cleaned)
            }
            SegmentStrategy::BlankLines => self.segment_at_blank_lines(&text),
        };

        debug!("reconstructed {} paragraph(s)", paragraphs.len());
        paragraphs
    }

    /// Line-level repair: a line of bare digits followed by a numbered line
    /// merges directly in front of the next line's digits ("8" + "9. Text"
    /// becomes "89. Text"). One forward-looking join per digit line; never
    /// consumes more than the immediate next line.
    fn repair_digit_lines(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].trim();
            if i + 1 < lines.len() && is_digit_line(line) {
                let next = lines[i + 1].trim();
                if let Some(caps) = self.numbered_line.captures(next) {
                    let merged = format!("{}{}.{}", line, &caps[1], &caps[2]);
                    cleaned.push(merged.trim().to_string());
                    i += 2;
                    continue;
                }
            }
            cleaned.push(line.to_string());
            i += 1;
        }

        cleaned.join("\n")
    }

    /// Pattern-level repair: collapse runs of single digits separated by
    /// line breaks immediately before a period ("1\n2\n0." becomes "120.").
    /// The three-digit pattern runs first so a three-way split is never
    /// half-consumed by the two-digit rule.
    fn repair_digit_runs(&self, text: &str) -> String {
        let text = collapse_digit_runs(&self.digit_triple, text);
        collapse_digit_runs(&self.digit_pair, &text)
    }

    /// Replace every line break that is not part of a blank-line run with a
    /// single space, undoing line wrapping within a paragraph. Blank-line
    /// runs survive as paragraph-break signals for the later stages.
    fn merge_wrapped_lines(&self, text: &str) -> String {
        const BREAK: &str = "\u{0}PARA\u{0}";

        let protected = self.para_break.replace_all(text, BREAK);
        let merged = protected.replace('\n', " ");
        merged.replace(BREAK, "\n\n")
    }

    /// Strip control characters, collapse every whitespace run to a single
    /// ASCII space, and trim.
    fn normalize_whitespace(&self, text: &str) -> String {
        let without_controls = self.control.replace_all(text, " ");
        self.whitespace
            .replace_all(&without_controls, " ")
            .trim()
            .to_string()
    }

    /// Cut the normalized text where a marker shape begins, keeping each
    /// marker attached to the paragraph it opens. Text before the first
    /// marker becomes an unmarked front-matter paragraph.
    fn segment_at_markers(&self, text: &str) -> Vec<Paragraph> {
        let mut cuts = Vec::new();
        for m in self.marker.find_iter(text) {
            // Word-boundary guard: "a123." and "2009." are prose, not markers.
            if !preceded_by_word(text, m.start()) {
                cuts.push(m.start());
            }
        }

        let mut paragraphs = Vec::new();
        let mut start = 0;
        for &cut in &cuts {
            if cut > start {
                push_paragraph(&mut paragraphs, &text[start..cut]);
            }
            start = cut;
        }
        push_paragraph(&mut paragraphs, &text[start..]);
        paragraphs
    }

    /// Cut raw text at blank-line runs, normalizing each segment on its own.
    fn segment_at_blank_lines(&self, text: &str) -> Vec<Paragraph> {
        self.blank_line
            .split(text)
            .map(|segment| self.normalize_whitespace(segment))
            .filter(|segment| !segment.is_empty())
            .map(Paragraph::parse)
            .collect()
    }
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new(ReconstructOptions::default())
    }
}

fn is_digit_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Drop the line breaks inside each matched digit run, unless the run is
/// immediately preceded by a digit — then the leading digits belong to a
/// marker that is already whole ("11\n2." is the tail of marker 11, not a
/// split 12) and the run is left untouched.
fn collapse_digit_runs(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in pattern.find_iter(text) {
        let preceded_by_digit = text[..m.start()]
            .bytes()
            .next_back()
            .is_some_and(|b| b.is_ascii_digit());
        if preceded_by_digit {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.extend(m.as_str().chars().filter(|&c| c != '\n'));
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

fn preceded_by_word(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn push_paragraph(paragraphs: &mut Vec<Paragraph>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        paragraphs.push(Paragraph::parse(trimmed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Reconstructor {
        Reconstructor::default()
    }

    fn texts(paragraphs: &[Paragraph]) -> Vec<&str> {
        paragraphs.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_digit_line_repair() {
        let out = engine().reconstruct_text("8\n9. Recommends action.\n10. Further notes.");
        assert_eq!(
            texts(&out),
            ["89. Recommends action.", "10. Further notes."]
        );
    }

    #[test]
    fn test_digit_line_repair_consumes_only_next_line() {
        // "1" is followed by another bare digit line, not a numbered line,
        // so only the "2" + "3." join fires and the "1" is left as prose.
        let out = engine().reconstruct_text("Intro text.\n1\n2\n3. Numbered point.");
        assert_eq!(texts(&out), ["Intro text. 1", "23. Numbered point."]);
    }

    #[test]
    fn test_digit_run_repair_two_digit() {
        let out = engine().reconstruct_text("11. Text 1\n2. Approved the budget.");
        assert_eq!(texts(&out), ["11. Text", "12. Approved the budget."]);
    }

    #[test]
    fn test_digit_run_repair_three_digit() {
        // Tested at the stage level: end to end, the line-level repair gets
        // to fully-isolated digit lines first.
        let repaired = engine().repair_digit_runs("Summary 1\n1\n9. Final recommendation.");
        assert_eq!(repaired, "Summary 119. Final recommendation.");
    }

    #[test]
    fn test_digit_run_three_digit_runs_before_two_digit() {
        // A three-way split must not be half-consumed by the two-digit rule.
        let repaired = engine().repair_digit_runs("See 1\n2\n0. Budget.");
        assert_eq!(repaired, "See 120. Budget.");
    }

    #[test]
    fn test_digit_run_guard_rejects_whole_marker() {
        // The "1" before the break is the tail of "11", not a split digit;
        // merging would fabricate marker 112.
        let out = engine().reconstruct_text("Item 11\n2. Next point.");
        assert_eq!(texts(&out), ["Item 11", "2. Next point."]);
    }

    #[test]
    fn test_wrapped_lines_merge_to_single_paragraph() {
        let out = engine().reconstruct_text("23. The committee\nrecommends that\nall parties comply.");
        assert_eq!(
            texts(&out),
            ["23. The committee recommends that all parties comply."]
        );
        assert!(!out[0].text.contains('\n'));
    }

    #[test]
    fn test_front_matter_emitted_without_marker() {
        let out = engine().reconstruct_text("Executive Summary\n1. First point.");
        assert_eq!(texts(&out), ["Executive Summary", "1. First point."]);
        assert_eq!(out[0].marker, None);
        assert_eq!(out[1].marker, Some(1));
    }

    #[test]
    fn test_blank_input_yields_empty_sequence() {
        assert!(engine().reconstruct_text("").is_empty());
        assert!(engine().reconstruct_text("  \n \n \t ").is_empty());
    }

    #[test]
    fn test_marker_free_text_is_one_paragraph() {
        let out = engine().reconstruct_text("Just prose\nwith a wrap.");
        assert_eq!(texts(&out), ["Just prose with a wrap."]);
    }

    #[test]
    fn test_no_breaks_is_identity_modulo_whitespace() {
        let text = "12. Already a clean single-line paragraph.";
        let out = engine().reconstruct_text(text);
        assert_eq!(texts(&out), [text]);
    }

    #[test]
    fn test_decimals_and_years_do_not_open_paragraphs() {
        let out = engine().reconstruct_text("4. Growth was 1.5 million in 2009. The trend held.");
        assert_eq!(
            texts(&out),
            ["4. Growth was 1.5 million in 2009. The trend held."]
        );
    }

    #[test]
    fn test_whitespace_normalization() {
        // Non-breaking space after the marker, a control character, a tab.
        let out = engine().reconstruct_text("21.\u{a0}The\u{0b}board\tmet.");
        assert_eq!(texts(&out), ["21. The board met."]);
        assert_eq!(out[0].marker, Some(21));
    }

    #[test]
    fn test_page_boundary_is_soft_break() {
        let source = SourceText::from_pages(vec![
            "1. Opening point that".to_string(),
            "continues on the next page.".to_string(),
        ]);
        let out = engine().reconstruct(&source);
        assert_eq!(texts(&out), ["1. Opening point that continues on the next page."]);
    }

    #[test]
    fn test_marker_split_across_page_boundary() {
        let source = SourceText::from_pages(vec![
            "3. Old business.\n4".to_string(),
            "5. New business.".to_string(),
        ]);
        let out = engine().reconstruct(&source);
        assert_eq!(texts(&out), ["3. Old business.", "45. New business."]);
    }

    #[test]
    fn test_empty_source() {
        assert!(engine().reconstruct(&SourceText::new()).is_empty());
    }

    #[test]
    fn test_blank_line_strategy_splits_on_page_breaks() {
        let engine = Reconstructor::new(ReconstructOptions::blank_lines());
        let source = SourceText::from_pages(vec![
            "First page text\nwith a wrap.".to_string(),
            "Second page text.".to_string(),
        ]);
        let out = engine.reconstruct(&source);
        assert_eq!(
            texts(&out),
            ["First page text with a wrap.", "Second page text."]
        );
    }

    #[test]
    fn test_blank_line_strategy_splits_on_padded_blank_lines() {
        let engine = Reconstructor::new(ReconstructOptions::blank_lines());
        let out = engine.reconstruct_text("One block.\n \nAnother block.");
        assert_eq!(texts(&out), ["One block.", "Another block."]);
    }

    #[test]
    fn test_repair_can_be_disabled() {
        let engine = Reconstructor::new(ReconstructOptions::numbered().with_marker_repair(false));
        let out = engine.reconstruct_text("8\n9. Recommends action.");
        // Without repair the bare "8" is just wrapped prose.
        assert_eq!(texts(&out), ["8", "9. Recommends action."]);
    }

    #[test]
    fn test_consecutive_markers() {
        let out = engine().reconstruct_text("1. First. 2. Second. 3. Third.");
        assert_eq!(texts(&out), ["1. First.", "2. Second.", "3. Third."]);
    }

    #[test]
    fn test_trailing_marker_without_body_stays_attached() {
        // "7." at the very end has no trailing whitespace, so it is not a
        // segmentation point.
        let out = engine().reconstruct_text("6. Closing remarks. 7.");
        assert_eq!(texts(&out), ["6. Closing remarks. 7."]);
    }
}
