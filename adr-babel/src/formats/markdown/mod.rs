//! Markdown format implementation
//!
//! Data Model:
//!
//!     Only the parts of a Markdown document that ADR extraction looks at become structural
//!     events. Everything else is dropped.
//!
//!     | Markdown         | Events                                                        |
//!     | Heading          | HeadingOpen(level), Inline(text), HeadingClose                |
//!     | Table            | TableOpen ... TableClose                                      |
//!     | Table header row | RowOpen, Inline per cell, RowClose (outside any body)         |
//!     | Table body rows  | TableBodyOpen, (RowOpen, Inline per cell, RowClose)*, TableBodyClose |
//!     | Paragraph        | Inline(text)                                                  |
//!     | Lists, quotes    | their children, recursively                                   |
//!
//!     Inline text is the node's raw source, trimmed: `**Approved**` stays `**Approved**` and a
//!     link keeps its target. Heading text drops the `#` markers, multi-line blocks keep their
//!     line breaks. Empty table cells still produce an (empty) Inline so cell positions stay
//!     meaningful.
//!
//! Library
//!
//!     We use the comrak crate with the GFM table extension enabled. comrak has no separate table
//!     body node; the body starts at the first row that is not flagged as the header.

mod parser;

pub use parser::tokenize_markdown;

use crate::error::FormatError;
use crate::format::Format;
use adr_parser::adr::StructuralEvent;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_tokenizing(&self) -> bool {
        true
    }

    fn tokenize(&self, source: &str) -> Result<Vec<StructuralEvent>, FormatError> {
        Ok(tokenize_markdown(source))
    }
}
