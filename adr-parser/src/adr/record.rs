//! Record data model
//!
//!     A [Record] is what extraction produces for one document. [TagGroup] and [TagIndex] only
//!     exist after aggregation and are the model handed to whatever renders the index.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Metadata read from the first table of a document.
///
/// Fields start unset: `index` at `0`, `date` at `None`, lists empty, status blank.
/// Extraction only ever fills them; validation decides whether what was filled is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordMetadata {
    /// Positive identifier; `0` means the `Index` row never appeared.
    pub index: u32,
    pub authors: Vec<String>,
    pub date: Option<NaiveDate>,
    pub status: String,
    pub tags: Vec<String>,
    #[serde(rename = "path")]
    pub source_path: PathBuf,
}

impl RecordMetadata {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        RecordMetadata {
            index: 0,
            authors: Vec::new(),
            date: None,
            status: String::new(),
            tags: Vec::new(),
            source_path: source_path.into(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One ADR: its title and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub heading: String,
    pub meta: RecordMetadata,
}

impl Record {
    pub fn index(&self) -> u32 {
        self.meta.index
    }

    pub fn source_path(&self) -> &Path {
        &self.meta.source_path
    }
}

/// A tag and every record carrying it, by ascending index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub tag: String,
    pub records: Vec<Record>,
}

impl TagGroup {
    pub fn indexes(&self) -> Vec<u32> {
        self.records.iter().map(Record::index).collect()
    }
}

/// The rendering model: tag groups in ascending tag order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    pub groups: Vec<TagGroup>,
}

impl TagIndex {
    pub fn tags(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.tag.as_str()).collect()
    }

    pub fn get(&self, tag: &str) -> Option<&TagGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
