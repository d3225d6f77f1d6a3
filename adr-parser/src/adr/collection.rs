//! Cross-record checks

use super::error::AdrError;
use super::record::Record;
use std::collections::HashMap;
use std::path::Path;

/// Fails on the first record whose index was already claimed, naming both documents.
pub fn verify_unique_indexes(records: &[Record]) -> Result<(), AdrError> {
    let mut seen: HashMap<u32, &Path> = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(first_path) = seen.get(&record.index()) {
            return Err(AdrError::DuplicateIndex {
                index: record.index(),
                path: record.source_path().to_path_buf(),
                first_path: first_path.to_path_buf(),
            });
        }
        seen.insert(record.index(), record.source_path());
    }
    Ok(())
}
