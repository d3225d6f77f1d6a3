//! Shared configuration loader for adr-index.
//!
//! `defaults/adr.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. Applications layer user-specific files on top of those defaults via [`Loader`]
//! before deserializing into [`AdrConfig`].

use adr_parser::adr::{ErrorPolicy, Schema};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/adr.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = ".adr-index.toml";

/// Top-level configuration consumed by adr-index.
#[derive(Debug, Clone, Deserialize)]
pub struct AdrConfig {
    pub schema: SchemaConfig,
    pub discovery: DiscoveryConfig,
    pub build: BuildConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    pub statuses: Vec<String>,
}

impl SchemaConfig {
    pub fn to_schema(&self) -> Schema {
        Schema::new(self.statuses.iter().cloned())
    }
}

/// Where documents are looked for.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    pub directory: PathBuf,
    pub extensions: Vec<String>,
}

impl DiscoveryConfig {
    /// Whether a path carries one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub error_policy: ErrorPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AdrConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AdrConfig, ConfigError> {
    Loader::new().build()
}
