//! Format implementations
//!
//! Markdown is the only input format. JSON and YAML serialize the finished index for
//! whatever renders it.

pub mod json;
pub mod markdown;
pub mod yaml;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use yaml::YamlFormat;
