//! Extraction tests over real Markdown
//!
//! Markdown → events → Record, checking the positional rules end to end.

use adr_babel::formats::markdown::tokenize_markdown;
use adr_parser::adr::{extract_record, validate_record, AdrError, Record, Schema};
use rstest::rstest;
use std::path::Path;

fn extract(md: &str) -> Result<Record, AdrError> {
    extract_record(Path::new("adr/doc.md"), &tokenize_markdown(md))
}

fn date(record: &Record) -> Option<String> {
    record.meta.date.map(|d| d.to_string())
}

#[test]
fn test_first_heading_and_first_table() {
    let md = "\
# Adopt tracing

| Field | Value |
|---|---|
| Index | 12 |
| Date | 2024-05-02 |
| Author | Ana ,  Bo |
| Status | Approved |
| Tags | logging, ops |

## Notes

# Another top level heading
";
    let record = extract(md).unwrap();
    assert_eq!(record.heading, "Adopt tracing");
    assert_eq!(record.meta.index, 12);
    assert_eq!(date(&record).as_deref(), Some("2024-05-02"));
    assert_eq!(record.meta.authors, ["Ana", "Bo"]);
    assert_eq!(record.meta.status, "Approved");
    assert_eq!(record.meta.tags, ["logging", "ops"]);
}

#[test]
fn test_heading_after_table_still_counts() {
    let md = "| k | v |\n|---|---|\n| Index | 2 |\n\n# Late title\n";
    let record = extract(md).unwrap();
    assert_eq!(record.heading, "Late title");
    assert_eq!(record.meta.index, 2);
}

#[test]
fn test_header_row_is_not_metadata() {
    let md = "| Index | 5 |\n|---|---|\n| Status | Approved |\n";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.index, 0);
    assert_eq!(record.meta.status, "Approved");
}

#[test]
fn test_second_table_ignored_after_metadata() {
    let md = "\
| k | v |
|---|---|
| Index | 1 |

| k | v |
|---|---|
| Index | nope |
| Tags | late |
";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.index, 1);
    assert!(record.meta.tags.is_empty());
}

#[test]
fn test_metadata_table_may_follow_unrelated_table() {
    let md = "\
| Option | Cost |
|---|---|
| Rewrite | high |

| k | v |
|---|---|
| Index | 9 |
";
    assert_eq!(extract(md).unwrap().meta.index, 9);
}

#[test]
fn test_third_column_is_inert() {
    let md = "\
| Key | Value | Note |
|---|---|---|
| Status | Rejected | Index |
| Index | 4 | 5 |
";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.status, "Rejected");
    assert_eq!(record.meta.index, 4);
}

#[test]
fn test_keys_are_case_sensitive() {
    let md = "| k | v |\n|---|---|\n| index | 3 |\n| TAGS | a |\n";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.index, 0);
    assert!(record.meta.tags.is_empty());
}

#[test]
fn test_empty_tags_cell_keeps_one_empty_entry() {
    let md = "| k | v |\n|---|---|\n| Tags |  |\n| Author | Ana,,Bo |\n";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.tags, [""]);
    assert_eq!(record.meta.authors, ["Ana", "", "Bo"]);
}

#[rstest]
#[case("| Date | 2024/01/01 |", "invalid date format, not YYYY-MM-DD: \"2024/01/01\" in adr/doc.md")]
#[case("| Date | *2024-01-01* |", "invalid date format, not YYYY-MM-DD: \"*2024-01-01*\" in adr/doc.md")]
#[case("| Index | 0001a |", "invalid index number \"0001a\" in adr/doc.md")]
#[case("| Index | `12` |", "invalid index number \"`12`\" in adr/doc.md")]
fn test_malformed_cell_fails(#[case] row: &str, #[case] message: &str) {
    let md = format!("| k | v |\n|---|---|\n{row}\n");
    let err = extract(&md).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_markup_in_status_is_not_a_known_status() {
    let md = "\
# Bold status

| k | v |
|---|---|
| Index | 1 |
| Date | 2024-01-01 |
| Author | [Ana](https://example.com/ana) |
| Status | **Approved** |
| Tags | x |
";
    let record = extract(md).unwrap();
    assert_eq!(record.meta.authors, ["[Ana](https://example.com/ana)"]);

    let err = validate_record(&record, &Schema::default()).unwrap_err();
    assert!(matches!(err, AdrError::InvalidStatus { ref status, .. } if status == "**Approved**"));
}

#[test]
fn test_empty_first_heading_gives_way_to_next() {
    let md = "#\n\n# Real title\n\n## Later\n";
    assert_eq!(extract(md).unwrap().heading, "Real title");
}

#[test]
fn test_zero_padded_index_parses() {
    let md = "| k | v |\n|---|---|\n| Index | 0007 |\n";
    assert_eq!(extract(md).unwrap().meta.index, 7);
}
