//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! Input formats tokenize documents into structural events; output formats serialize the
//! finished tag index.

use crate::error::FormatError;
use adr_parser::adr::{StructuralEvent, TagIndex};

/// Trait for document formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &["mine"]
///     }
///
///     fn supports_tokenizing(&self) -> bool {
///         true
///     }
///
///     fn tokenize(&self, source: &str) -> Result<Vec<StructuralEvent>, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions (without the dot) of documents in this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports tokenizing (source → events)
    fn supports_tokenizing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (index → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Tokenize a document into structural events
    ///
    /// Default implementation returns NotSupported error.
    fn tokenize(&self, _source: &str) -> Result<Vec<StructuralEvent>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support tokenizing",
            self.name()
        )))
    }

    /// Serialize a tag index into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _index: &TagIndex) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
