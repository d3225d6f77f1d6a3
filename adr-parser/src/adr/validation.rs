//! Per-record schema checks
//!
//!     Checks run in a fixed order and the first failure is the only one reported:
//!     index, date, status, authors, tags.

use super::error::AdrError;
use super::record::Record;
use super::schema::Schema;

pub fn validate_record(record: &Record, schema: &Schema) -> Result<(), AdrError> {
    let meta = &record.meta;
    let path = || meta.source_path.clone();

    if meta.index == 0 {
        return Err(AdrError::InvalidIndex { path: path() });
    }
    if meta.date.is_none() {
        return Err(AdrError::DateRequired { path: path() });
    }
    if !schema.allows_status(&meta.status) {
        return Err(AdrError::InvalidStatus {
            path: path(),
            status: meta.status.clone(),
            allowed: schema.statuses().to_vec(),
        });
    }
    if meta.authors.is_empty() {
        return Err(AdrError::AuthorsRequired { path: path() });
    }
    if meta.tags.is_empty() {
        return Err(AdrError::TagsRequired { path: path() });
    }
    Ok(())
}
