//! Format interoperability for ADR indexing
//!
//!     This crate sits at both ends of the adr-parser pipeline: it turns markup documents into
//!     [StructuralEvent](adr_parser::adr::StructuralEvent) streams on the way in, and turns the
//!     finished [TagIndex](adr_parser::adr::TagIndex) into text on the way out.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (tokenizing and/or serialization)
//!     - FormatRegistry: discovery and selection of formats, by name or file extension
//!     - Format implementations: concrete implementations for each supported format
//!
//!     This is a pure lib: no code here should assume a shell environment, be it printing to
//!     stdout, env vars or exit codes. The binary does that.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # Tokenizer, backed by comrak
//!     │   ├── json                # Index serializer
//!     │   └── yaml                # Index serializer
//!     ├── lib.rs
//!
//! Implementation Principles
//!
//!     We never write a markup parser here. Markdown goes through comrak and the work in this
//!     crate is only the mapping from comrak's AST to the flat event stream. Likewise the index
//!     serializers hand the model to serde.
//!
//!     Templated rendering of the index (a README, a site page) is left to
//!     downstream tools that consume the JSON or YAML output.
//!
//! Testing
//!     tests
//!     └── markdown
//!         ├── main.rs
//!         └── <testname>.rs
//!
//! Rust only picks up `tests/<dir>/main.rs` from subdirectories, so every test file is a module
//! of that main.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
