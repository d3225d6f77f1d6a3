//! Format registry for format discovery and selection
//!
//! Formats are registered by name. Tokenizing formats can also be looked up by the file
//! extension of the document being read.

use crate::error::FormatError;
use crate::format::Format;
use adr_parser::adr::{StructuralEvent, TagIndex};
use std::collections::HashMap;

/// Registry of document formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
///
/// let events = registry.tokenize(source, "markdown")?;
/// let json = registry.serialize(&index, "json")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Get the tokenizing format that claims a file extension (without the dot)
    ///
    /// When several formats claim the same extension the one with the smallest name wins, so
    /// the lookup does not depend on map iteration order.
    pub fn get_by_extension(&self, extension: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .values()
            .filter(|f| f.supports_tokenizing() && f.file_extensions().contains(&extension))
            .min_by(|a, b| a.name().cmp(b.name()))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::ExtensionNotFound(extension.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of the formats that can serialize an index (sorted)
    pub fn output_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .formats
            .values()
            .filter(|f| f.supports_serialization())
            .map(|f| f.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Tokenize source text using the specified format
    pub fn tokenize(&self, source: &str, format: &str) -> Result<Vec<StructuralEvent>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_tokenizing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support tokenizing",
                format
            )));
        }
        fmt.tokenize(source)
    }

    /// Serialize an index using the specified format
    pub fn serialize(&self, index: &TagIndex, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(index)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::yaml::YamlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
