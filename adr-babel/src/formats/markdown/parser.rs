//! Markdown tokenizing (Markdown → structural events)
//!
//! Pipeline: Markdown string → Comrak AST → StructuralEvents
//!
//! comrak only decides the block structure. The text of every Inline is cut from the source
//! through the node's sourcepos, so markup inside a heading or a cell reaches extraction as
//! written.

use adr_parser::adr::StructuralEvent;
use comrak::nodes::{AstNode, LineColumn, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use tracing::trace;

/// Tokenize a Markdown string. comrak accepts any input, so this cannot fail.
pub fn tokenize_markdown(source: &str) -> Vec<StructuralEvent> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut tokenizer = Tokenizer {
        lines: source.lines().collect(),
        events: Vec::new(),
    };
    tokenizer.collect_events_from_node(root);
    trace!(count = tokenizer.events.len(), "tokenized markdown");
    tokenizer.events
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

struct Tokenizer<'s> {
    lines: Vec<&'s str>,
    events: Vec<StructuralEvent>,
}

impl<'s> Tokenizer<'s> {
    /// Recursively collect events from a Comrak AST node
    fn collect_events_from_node<'a>(&mut self, node: &'a AstNode<'a>) {
        let node_data = node.data.borrow();
        let pos = node_data.sourcepos;

        match &node_data.value {
            NodeValue::Document
            | NodeValue::BlockQuote
            | NodeValue::List(_)
            | NodeValue::Item(_) => {
                for child in node.children() {
                    self.collect_events_from_node(child);
                }
            }

            NodeValue::Heading(heading) => {
                let text = if heading.setext {
                    // last line is the underline
                    self.block_text(pos.start, pos.end.line.saturating_sub(1))
                } else {
                    atx_content(self.line_from(pos.start)).to_string()
                };
                self.events.push(StructuralEvent::HeadingOpen(heading.level));
                self.events.push(StructuralEvent::Inline(text));
                self.events.push(StructuralEvent::HeadingClose);
            }

            NodeValue::Paragraph => {
                let text = self.block_text(pos.start, pos.end.line);
                self.events.push(StructuralEvent::Inline(text));
            }

            NodeValue::Table(_) => {
                self.events.push(StructuralEvent::TableOpen);

                let mut in_body = false;
                for row in node.children() {
                    let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
                    if !is_header && !in_body {
                        self.events.push(StructuralEvent::TableBodyOpen);
                        in_body = true;
                    }
                    self.collect_row_events(row);
                }

                if in_body {
                    self.events.push(StructuralEvent::TableBodyClose);
                }
                self.events.push(StructuralEvent::TableClose);
            }

            _ => {
                // Code blocks, html, thematic breaks: nothing extraction cares about
            }
        }
    }

    /// One Inline per cell comrak kept. comrak pads short rows and drops cells past the header
    /// width; padded cells come out empty.
    fn collect_row_events<'a>(&mut self, row: &'a AstNode<'a>) {
        let start = row.data.borrow().sourcepos.start;
        let raw_cells = split_row(self.line_from(start));

        self.events.push(StructuralEvent::RowOpen);
        for (i, _) in row.children().enumerate() {
            let text = raw_cells.get(i).map_or("", |cell| cell.trim());
            self.events.push(StructuralEvent::Inline(text.to_string()));
        }
        self.events.push(StructuralEvent::RowClose);
    }

    /// Source line of `pos`, starting at its column.
    fn line_from(&self, pos: LineColumn) -> &'s str {
        let line = self.line(pos.line);
        line.get(pos.column.saturating_sub(1)..).unwrap_or(line)
    }

    fn line(&self, number: usize) -> &'s str {
        number
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Lines `start.line..=end_line`, each trimmed, joined by newlines.
    fn block_text(&self, start: LineColumn, end_line: usize) -> String {
        let mut lines = vec![self.line_from(start).trim()];
        for number in start.line + 1..=end_line {
            lines.push(self.line(number).trim());
        }
        lines.join("\n")
    }
}

/// Heading text without the opening `#`s and the optional closing sequence.
fn atx_content(line: &str) -> &str {
    let text = line.trim().trim_start_matches('#').trim();
    let without_closing = text.trim_end_matches('#');
    if without_closing.is_empty() {
        ""
    } else if without_closing.ends_with(|c: char| c == ' ' || c == '\t') {
        without_closing.trim_end()
    } else {
        text
    }
}

/// Split a table row on unescaped pipes. Leading and trailing pipes are optional.
fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = match line.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => line,
    };

    let mut cells = Vec::new();
    let mut cell_start = 0;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '|' if !escaped => {
                cells.push(&line[cell_start..i]);
                cell_start = i + 1;
            }
            _ => escaped = false,
        }
    }
    cells.push(&line[cell_start..]);
    cells
}
