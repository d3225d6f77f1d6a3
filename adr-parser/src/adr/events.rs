//! Defines the flat event stream representation of a document.

/// A single positional marker emitted while scanning a markup document.
///
/// This is the whole contract between a tokenizer and the extractor. Tokenizers own the
/// mapping from their own AST to these events; the extractor never sees format specifics.
/// Table header rows are emitted as rows outside any table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralEvent {
    /// Start of a heading, with its level (1 for `#`).
    HeadingOpen(u8),
    HeadingClose,
    TableOpen,
    TableClose,
    TableBodyOpen,
    TableBodyClose,
    RowOpen,
    RowClose,
    /// Source text of one inline run (a heading, a table cell, a paragraph), markup included.
    Inline(String),
}

impl StructuralEvent {
    pub fn inline(text: impl Into<String>) -> Self {
        StructuralEvent::Inline(text.into())
    }
}
