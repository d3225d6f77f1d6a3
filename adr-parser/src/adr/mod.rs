//! Main module for adr library functionality

pub mod aggregation;
pub mod builder;
pub mod collection;
pub mod error;
pub mod events;
pub mod extraction;
pub mod record;
pub mod schema;
pub mod validation;

pub use aggregation::group_by_tag;
pub use builder::{ErrorPolicy, IndexBuilder, SourceDocument};
pub use collection::verify_unique_indexes;
pub use error::{AdrError, BuildFailure, ErrorKind};
pub use events::StructuralEvent;
pub use extraction::{extract_record, Extractor};
pub use record::{Record, RecordMetadata, TagGroup, TagIndex};
pub use schema::{Schema, DEFAULT_STATUSES};
pub use validation::validate_record;
