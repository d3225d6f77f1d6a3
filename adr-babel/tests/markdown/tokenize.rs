//! Tokenizer tests (Markdown → structural events)
//!
//! These check the event shapes extraction depends on.

use adr_babel::format::Format;
use adr_babel::formats::markdown::MarkdownFormat;
use adr_parser::adr::StructuralEvent;

fn tokenize(md: &str) -> Vec<StructuralEvent> {
    MarkdownFormat.tokenize(md).expect("markdown always tokenizes")
}

fn inlines(events: &[StructuralEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            StructuralEvent::Inline(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_empty_cell_yields_empty_inline() {
    let events = tokenize("| Key | Value |\n|---|---|\n| Tags |  |\n");
    assert_eq!(inlines(&events), ["Key", "Value", "Tags", ""]);
}

#[test]
fn test_cell_text_is_trimmed_raw_source() {
    let events = tokenize("| Key | Value |\n|---|---|\n|  Status  | **Approved** |\n");
    assert_eq!(inlines(&events), ["Key", "Value", "Status", "**Approved**"]);
}

#[test]
fn test_link_kept_as_written() {
    let events = tokenize("# See [ADR 1](0001.md)\n");
    assert_eq!(inlines(&events), ["See [ADR 1](0001.md)"]);
}

#[test]
fn test_escaped_pipe_stays_in_cell() {
    let events = tokenize("| Key | Value |\n|---|---|\n| Tags | a \\| b |\n");
    assert_eq!(inlines(&events), ["Key", "Value", "Tags", "a \\| b"]);
}

#[test]
fn test_setext_heading() {
    let events = tokenize("Title\n=====\n");
    assert_eq!(
        events,
        vec![
            StructuralEvent::HeadingOpen(1),
            StructuralEvent::inline("Title"),
            StructuralEvent::HeadingClose,
        ]
    );
}

#[test]
fn test_two_tables_each_get_their_own_body() {
    let md = "| a | b |\n|---|---|\n| 1 | 2 |\n\ntext\n\n| c | d |\n|---|---|\n| 3 | 4 |\n";
    let events = tokenize(md);
    let opens = events
        .iter()
        .filter(|e| **e == StructuralEvent::TableBodyOpen)
        .count();
    let closes = events
        .iter()
        .filter(|e| **e == StructuralEvent::TableBodyClose)
        .count();
    assert_eq!((opens, closes), (2, 2));
}

#[test]
fn test_blockquote_heading_is_seen() {
    let events = tokenize("> # Quoted\n");
    assert_eq!(events[0], StructuralEvent::HeadingOpen(1));
}

#[test]
fn test_empty_document() {
    assert!(tokenize("").is_empty());
}
