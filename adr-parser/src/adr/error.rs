//! Error types for extraction, validation and indexing
//!
//!     Every error names the document it came from. [ErrorKind] gives the coarse class for
//!     callers that branch on it; the message is what ends up in front of the user.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A metadata cell could not be parsed (detected during extraction).
    Parse,
    /// A record is missing a required field or holds a disallowed value.
    Schema,
    /// Two records clash (detected over the whole collection).
    Conflict,
    /// A document or directory could not be read or tokenized.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Schema => "schema",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Io => "io",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdrError {
    #[error("invalid index number {value:?} in {}", .path.display())]
    InvalidIndexNumber { path: PathBuf, value: String },

    #[error("invalid date format, not YYYY-MM-DD: {value:?} in {}", .path.display())]
    InvalidDate { path: PathBuf, value: String },

    #[error("invalid ADR index in {}", .path.display())]
    InvalidIndex { path: PathBuf },

    #[error("date is required in {}", .path.display())]
    DateRequired { path: PathBuf },

    #[error(
        "invalid status {status:?}, must be one of: {} in {}",
        .allowed.join(", "),
        .path.display()
    )]
    InvalidStatus {
        path: PathBuf,
        status: String,
        allowed: Vec<String>,
    },

    #[error("authors is required in {}", .path.display())]
    AuthorsRequired { path: PathBuf },

    #[error("tags is required in {}", .path.display())]
    TagsRequired { path: PathBuf },

    /// `path` is the later document, `first_path` the one that claimed the index first.
    #[error(
        "duplicate index {index}, conflict between {} and {}",
        .path.display(),
        .first_path.display()
    )]
    DuplicateIndex {
        index: u32,
        path: PathBuf,
        first_path: PathBuf,
    },

    #[error("cannot read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("cannot tokenize {}: {message}", .path.display())]
    Tokenize { path: PathBuf, message: String },
}

impl AdrError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        AdrError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AdrError::InvalidIndexNumber { .. } | AdrError::InvalidDate { .. } => ErrorKind::Parse,
            AdrError::InvalidIndex { .. }
            | AdrError::DateRequired { .. }
            | AdrError::InvalidStatus { .. }
            | AdrError::AuthorsRequired { .. }
            | AdrError::TagsRequired { .. } => ErrorKind::Schema,
            AdrError::DuplicateIndex { .. } => ErrorKind::Conflict,
            AdrError::Io { .. } | AdrError::Tokenize { .. } => ErrorKind::Io,
        }
    }

    /// The document the error is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            AdrError::InvalidIndexNumber { path, .. }
            | AdrError::InvalidDate { path, .. }
            | AdrError::InvalidIndex { path }
            | AdrError::DateRequired { path }
            | AdrError::InvalidStatus { path, .. }
            | AdrError::AuthorsRequired { path }
            | AdrError::TagsRequired { path }
            | AdrError::DuplicateIndex { path, .. }
            | AdrError::Io { path, .. }
            | AdrError::Tokenize { path, .. } => path,
        }
    }
}

/// One or more errors that stopped an index build. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_errors(.errors))]
pub struct BuildFailure {
    errors: Vec<AdrError>,
}

impl BuildFailure {
    /// Returns `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<AdrError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(BuildFailure { errors })
        }
    }

    pub fn errors(&self) -> &[AdrError] {
        &self.errors
    }

    pub fn first(&self) -> &AdrError {
        &self.errors[0]
    }
}

impl From<AdrError> for BuildFailure {
    fn from(err: AdrError) -> Self {
        BuildFailure { errors: vec![err] }
    }
}

fn render_errors(errors: &[AdrError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
