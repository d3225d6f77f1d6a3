//! Finding and tokenizing the ADR documents of a directory
//!
//! Only direct children are considered. Subdirectories and files with other extensions are
//! skipped without a word. Paths are sorted so that the run never depends on the order the
//! file system lists them in.

use adr_babel::FormatRegistry;
use adr_config::DiscoveryConfig;
use adr_parser::adr::{AdrError, SourceDocument};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// List the documents of `directory`, sorted by path.
pub fn discover(directory: &Path, discovery: &DiscoveryConfig) -> Result<Vec<PathBuf>, AdrError> {
    let entries = fs::read_dir(directory).map_err(|e| AdrError::io(directory, &e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AdrError::io(directory, &e))?.path();
        if path.is_dir() || !discovery.matches(&path) {
            trace!(path = %path.display(), "skipping");
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    debug!(
        directory = %directory.display(),
        count = paths.len(),
        "discovered documents"
    );
    Ok(paths)
}

/// Read and tokenize every document with the format registered for its extension.
///
/// Files are read lazily, one per item, so the builder's error policy decides how far to go.
pub fn load_documents<'a>(
    paths: &'a [PathBuf],
    registry: &'a FormatRegistry,
) -> impl Iterator<Item = Result<SourceDocument, AdrError>> + 'a {
    paths.iter().map(move |path| load_document(path, registry))
}

fn load_document(path: &Path, registry: &FormatRegistry) -> Result<SourceDocument, AdrError> {
    let source = fs::read_to_string(path).map_err(|e| AdrError::io(path, &e))?;
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    let events = registry
        .get_by_extension(extension)
        .and_then(|format| format.tokenize(&source))
        .map_err(|e| AdrError::Tokenize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    trace!(path = %path.display(), events = events.len(), "tokenized document");
    Ok(SourceDocument::new(path, events))
}
