//! Positional metadata extraction
//!
//!     An ADR has no front matter. Its shape is purely positional:
//!
//!         # Use Rust for the indexer          <- first heading: the record title
//!
//!         | Key    | Value      |              <- header row: ignored
//!         |--------|------------|
//!         | Index  | 12         |              <- first table body: metadata rows
//!         | Date   | 2024-01-31 |
//!         | Author | Ana, Bo    |
//!         | Status | Approved   |
//!         | Tags   | build, ci  |
//!
//!     The [Extractor] is a small automaton over [StructuralEvent]s:
//!
//!         Searching ──HeadingOpen (while no title)──▶ InHeading ──HeadingClose──▶ Searching
//!         Searching ──TableBodyOpen (until finalized)──▶ InTableBody
//!         InTableBody ──RowOpen──▶ InRow ──RowClose──▶ InTableBody
//!         InTableBody | InRow ──TableBodyClose | TableClose──▶ Searching
//!
//!     Inside a row the first inline text is the key and the second its value. Rows are assumed
//!     to have exactly two cells and this is never checked: extra cells are inert and a lone key
//!     is dropped at the row close. Once any known key has been applied the metadata is
//!     finalized and later tables are skipped, however they look.
//!
//!     Only `Index` and `Date` can fail here. Missing fields are the validator's business.

use super::error::AdrError;
use super::events::StructuralEvent;
use super::record::{Record, RecordMetadata};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// `NaiveDate` parsing is lenient about padding, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Searching,
    InHeading,
    InTableBody,
    /// `key` is `None` until the first cell; `Some("")` once the value cell was consumed.
    InRow {
        key: Option<String>,
    },
}

/// Single-document extraction state. Feed it every event, then [finish](Extractor::finish).
#[derive(Debug)]
pub struct Extractor {
    state: State,
    heading: String,
    metadata: RecordMetadata,
    metadata_finalized: bool,
}

impl Extractor {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Extractor {
            state: State::Searching,
            heading: String::new(),
            metadata: RecordMetadata::new(source_path),
            metadata_finalized: false,
        }
    }

    /// Advance the automaton by one event.
    pub fn feed(&mut self, event: &StructuralEvent) -> Result<(), AdrError> {
        let state = std::mem::replace(&mut self.state, State::Searching);
        self.state = match (state, event) {
            (State::Searching, StructuralEvent::HeadingOpen(_)) if self.heading.is_empty() => {
                State::InHeading
            }
            (State::InHeading, StructuralEvent::Inline(text)) => {
                self.heading.push_str(text);
                State::InHeading
            }
            (State::InHeading, StructuralEvent::HeadingClose) => State::Searching,

            (State::Searching, StructuralEvent::TableBodyOpen) if !self.metadata_finalized => {
                State::InTableBody
            }
            (State::InTableBody, StructuralEvent::RowOpen) => State::InRow { key: None },
            (State::InRow { key: None }, StructuralEvent::Inline(text)) => State::InRow {
                key: Some(text.clone()),
            },
            (State::InRow { key: Some(key) }, StructuralEvent::Inline(value)) => {
                self.apply(&key, value)?;
                State::InRow {
                    key: Some(String::new()),
                }
            }
            (State::InRow { .. }, StructuralEvent::RowClose) => State::InTableBody,
            (
                State::InTableBody | State::InRow { .. },
                StructuralEvent::TableBodyClose | StructuralEvent::TableClose,
            ) => State::Searching,

            (state, _) => state,
        };
        Ok(())
    }

    pub fn finish(self) -> Record {
        Record {
            heading: self.heading,
            meta: self.metadata,
        }
    }

    fn path(&self) -> &Path {
        &self.metadata.source_path
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), AdrError> {
        match key {
            "Index" => self.metadata.index = parse_index(self.path(), value)?,
            "Date" => self.metadata.date = Some(parse_date(self.path(), value)?),
            "Author" => self.metadata.authors = parse_comma_list(value),
            "Status" => self.metadata.status = value.to_string(),
            "Tags" => self.metadata.tags = parse_comma_list(value),
            _ => {
                trace!(key, path = %self.path().display(), "ignoring unknown metadata key");
                return Ok(());
            }
        }
        self.metadata_finalized = true;
        Ok(())
    }
}

/// Run the extractor over a whole document.
///
/// Every event is consumed; there is no early exit once title and metadata are known.
pub fn extract_record<'a, I>(source_path: &Path, events: I) -> Result<Record, AdrError>
where
    I: IntoIterator<Item = &'a StructuralEvent>,
{
    let mut extractor = Extractor::new(source_path);
    for event in events {
        extractor.feed(event)?;
    }
    let record = extractor.finish();
    debug!(
        path = %source_path.display(),
        index = record.meta.index,
        heading = %record.heading,
        "extracted record"
    );
    Ok(record)
}

fn parse_index(path: &Path, value: &str) -> Result<u32, AdrError> {
    value.parse().map_err(|_| AdrError::InvalidIndexNumber {
        path: path.to_path_buf(),
        value: value.to_string(),
    })
}

fn parse_date(path: &Path, value: &str) -> Result<NaiveDate, AdrError> {
    let invalid = || AdrError::InvalidDate {
        path: path.to_path_buf(),
        value: value.to_string(),
    };
    if !DATE_SHAPE.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Split on commas and trim. Empty segments are kept as empty strings.
fn parse_comma_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}
