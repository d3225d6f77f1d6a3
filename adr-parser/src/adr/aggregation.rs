//! Grouping records by tag
//!
//!     Tags are sorted by plain byte order. Inside a group, records keep their collection order
//!     and are then stably sorted by index, so ties (which collection validation rules out) would
//!     fall back to input order. A record carrying several tags shows up in each of their groups,
//!     but at most once per group even if a tag is repeated in its own list.

use super::record::{Record, TagGroup, TagIndex};
use std::collections::BTreeSet;

pub fn group_by_tag(records: &[Record]) -> TagIndex {
    let tags: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.meta.tags.iter().map(String::as_str))
        .collect();

    let groups = tags
        .into_iter()
        .map(|tag| {
            let mut matched: Vec<Record> = records
                .iter()
                .filter(|r| r.meta.has_tag(tag))
                .cloned()
                .collect();
            matched.sort_by_key(Record::index);
            TagGroup {
                tag: tag.to_string(),
                records: matched,
            }
        })
        .collect();

    TagIndex { groups }
}
