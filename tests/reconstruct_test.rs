//! End-to-end tests for the reconstruction engine.

use repara::{reconstruct, ReconstructOptions, Reconstructor, SourceText};

fn texts(paragraphs: &[repara::Paragraph]) -> Vec<&str> {
    paragraphs.iter().map(|p| p.text.as_str()).collect()
}

/// Marker numbers in the order they appear in a piece of text, scanned by
/// hand so the check is independent of the engine's own segmentation.
fn marker_order(text: &str) -> Vec<u32> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric()) {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let run = i - start;
            if run <= 3
                && i < bytes.len()
                && bytes[i] == b'.'
                && bytes.get(i + 1).is_some_and(|b| b.is_ascii_whitespace())
            {
                markers.push(text[start..i].parse().unwrap());
            }
        } else {
            i += 1;
        }
    }
    markers
}

#[test]
fn digit_split_repair_end_to_end() {
    let out = reconstruct("8\n9. Recommends action.\n10. Further notes.");
    assert_eq!(
        texts(&out),
        ["89. Recommends action.", "10. Further notes."]
    );
}

#[test]
fn two_digit_pattern_repair_positive_and_negative() {
    // The isolated "1" before the break is a split digit: merges into 12.
    let merged = reconstruct("11. Text 1\n2. Approved the budget.");
    assert_eq!(texts(&merged), ["11. Text", "12. Approved the budget."]);

    // Here the "1" is the tail of marker 11: must not fabricate 112.
    let guarded = reconstruct("Report 11\n2. Approved the budget.");
    assert_eq!(
        texts(&guarded),
        ["Report 11", "2. Approved the budget."]
    );
    assert!(guarded.iter().all(|p| !p.text.contains("112.")));
}

#[test]
fn wrapped_lines_merge_without_residual_breaks() {
    let out = reconstruct("23. The committee\nrecommends that\nall parties comply.");
    assert_eq!(
        texts(&out),
        ["23. The committee recommends that all parties comply."]
    );
}

#[test]
fn no_paragraph_contains_a_line_break() {
    let raw = "Front matter line\nwrapped badly.\n12. First\npoint.\n\n1\n3. Second point.\n14. Third.";
    for paragraph in reconstruct(raw) {
        assert!(!paragraph.text.contains('\n'), "break in {:?}", paragraph.text);
        assert!(!paragraph.text.trim().is_empty());
    }
}

#[test]
fn marker_order_is_preserved() {
    let raw = "Intro.\n2. Alpha wraps\nhere.\n1\n1. Bravo.\n12. Charlie.\n1\n9. Delta.";
    let joined = reconstruct(raw)
        .iter()
        .map(|p| p.text.clone())
        .collect::<Vec<_>>()
        .join(" ");
    let markers = marker_order(&joined);

    let mut sorted = markers.clone();
    sorted.sort_unstable();
    assert_eq!(markers, sorted);
    assert_eq!(markers, [2, 11, 12, 19]);
}

#[test]
fn blank_and_whitespace_inputs_yield_empty_sequences() {
    assert!(reconstruct("").is_empty());
    assert!(reconstruct(" \n\n \t \u{a0} ").is_empty());

    let engine = Reconstructor::default();
    assert!(engine.reconstruct(&SourceText::new()).is_empty());
    assert!(engine
        .reconstruct(&SourceText::from_pages(vec![String::new(), String::new()]))
        .is_empty());
}

#[test]
fn front_matter_precedes_first_marker() {
    let out = reconstruct("Executive Summary\n1. First point.");
    assert_eq!(texts(&out), ["Executive Summary", "1. First point."]);
    assert!(!out[0].is_numbered());
    assert!(out[1].is_numbered());
}

#[test]
fn break_free_input_is_identity_modulo_whitespace() {
    let text = "5. One clean paragraph with   odd  spacing.";
    let out = reconstruct(text);
    assert_eq!(texts(&out), ["5. One clean paragraph with odd spacing."]);
}

#[test]
fn empty_page_in_the_middle_is_harmless() {
    let source = SourceText::from_pages(vec![
        "1. First point.".to_string(),
        String::new(),
        "2. Second point.".to_string(),
    ]);
    let out = Reconstructor::default().reconstruct(&source);
    assert_eq!(texts(&out), ["1. First point.", "2. Second point."]);
}

#[test]
fn paragraph_wrapping_across_page_boundary_is_merged() {
    let source = SourceText::from_pages(vec![
        "17. The working group agreed that".to_string(),
        "the draft be adopted.\n18. Next item.".to_string(),
    ]);
    let out = Reconstructor::default().reconstruct(&source);
    assert_eq!(
        texts(&out),
        [
            "17. The working group agreed that the draft be adopted.",
            "18. Next item."
        ]
    );
}

#[test]
fn blank_line_strategy_treats_page_breaks_as_paragraph_breaks() {
    let options = ReconstructOptions::blank_lines();
    let source = SourceText::from_pages(vec![
        "Page one text\nthat wraps.".to_string(),
        "Page two text.".to_string(),
    ]);
    let out = Reconstructor::new(options).reconstruct(&source);
    assert_eq!(texts(&out), ["Page one text that wraps.", "Page two text."]);
}

#[test]
fn markerless_prose_degrades_to_single_paragraph() {
    let out = reconstruct("A letter with no numbering,\nwrapped over\nthree lines.");
    assert_eq!(
        texts(&out),
        ["A letter with no numbering, wrapped over three lines."]
    );
}
