//! # adr-parser
//!
//! Metadata extraction and validation for Architecture Decision Records.
//!
//! Pipeline
//!
//!     A tokenizer (see the adr-babel crate) turns a document into a flat stream of
//!     [StructuralEvent](adr::events::StructuralEvent)s. From there everything in this crate is
//!     format agnostic:
//!
//!         events → extraction → record validation → collection validation → tag aggregation
//!
//!     The extractor reads the stream positionally: the first heading is the title, the body
//!     rows of the first table are `key | value` metadata. Nothing else in the document matters.
//!
//!     Each stage returns an explicit result. [IndexBuilder](adr::builder::IndexBuilder) strings
//!     them together and decides, by [ErrorPolicy](adr::builder::ErrorPolicy), whether to stop at
//!     the first error or to gather every error in the batch. There is never partial output.
//!
//! File Layout
//!
//!     src/adr
//!       ├── events.rs       StructuralEvent, the tokenizer/extractor seam
//!       ├── record.rs       Record, RecordMetadata, TagGroup, TagIndex
//!       ├── schema.rs       The allowed status values
//!       ├── extraction.rs   The positional state machine
//!       ├── validation.rs   Per-record checks
//!       ├── collection.rs   Cross-record checks
//!       ├── aggregation.rs  Grouping by tag
//!       ├── builder.rs      Orchestration
//!       └── error.rs        Error taxonomy

pub mod adr;
