//! Index building
//!
//!     [IndexBuilder] drives the whole pipeline over already tokenized documents:
//!
//!         extract each document → validate each record → check indexes are unique → group by tag
//!
//!     Documents may also arrive as load results, in which case a file that could not be read
//!     or tokenized is just another per-document error.
//!
//!     Stages never recover. Under [ErrorPolicy::FailFast] the first error is the result. Under
//!     [ErrorPolicy::CollectAll] every document still gets loaded, extracted and validated so that all
//!     per-document problems are reported in one go; uniqueness is only checked once every
//!     record is individually valid. In both cases a failed build yields no index at all.

use super::aggregation::group_by_tag;
use super::collection::verify_unique_indexes;
use super::error::{AdrError, BuildFailure};
use super::events::StructuralEvent;
use super::extraction::extract_record;
use super::record::{Record, TagIndex};
use super::schema::Schema;
use super::validation::validate_record;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info, info_span};

/// What to do when a document fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first error.
    #[default]
    FailFast,
    /// Report every per-document error of the batch.
    CollectAll,
}

/// One tokenized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub events: Vec<StructuralEvent>,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, events: Vec<StructuralEvent>) -> Self {
        SourceDocument {
            path: path.into(),
            events,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    schema: Schema,
    policy: ErrorPolicy,
}

impl IndexBuilder {
    pub fn new(schema: Schema) -> Self {
        IndexBuilder {
            schema,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract and validate every document, then check the collection.
    ///
    /// Records come back in input order.
    pub fn records<I>(&self, documents: I) -> Result<Vec<Record>, BuildFailure>
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        self.records_from(documents.into_iter().map(Ok))
    }

    /// Like [records](IndexBuilder::records), over documents whose loading may have failed.
    ///
    /// Load errors count as per-document errors, so the policy applies to them as well. The
    /// iterator is consumed lazily: under [ErrorPolicy::FailFast] nothing past the first error
    /// is pulled.
    pub fn records_from<I>(&self, documents: I) -> Result<Vec<Record>, BuildFailure>
    where
        I: IntoIterator<Item = Result<SourceDocument, AdrError>>,
    {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for loaded in documents {
            let result = loaded.and_then(|document| {
                let _span = info_span!("document", path = %document.path.display()).entered();
                self.record(&document)
            });
            match result {
                Ok(record) => records.push(record),
                Err(err) if self.policy == ErrorPolicy::FailFast => return Err(err.into()),
                Err(err) => {
                    debug!(error = %err, "collecting error");
                    errors.push(err);
                }
            }
        }

        if let Some(failure) = BuildFailure::from_errors(errors) {
            return Err(failure);
        }
        verify_unique_indexes(&records)?;
        Ok(records)
    }

    /// Run the full pipeline and return the tag index.
    pub fn build<I>(&self, documents: I) -> Result<TagIndex, BuildFailure>
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        self.build_from(documents.into_iter().map(Ok))
    }

    pub fn build_from<I>(&self, documents: I) -> Result<TagIndex, BuildFailure>
    where
        I: IntoIterator<Item = Result<SourceDocument, AdrError>>,
    {
        let records = self.records_from(documents)?;
        let index = group_by_tag(&records);
        info!(
            records = records.len(),
            tags = index.len(),
            "built tag index"
        );
        Ok(index)
    }

    fn record(&self, document: &SourceDocument) -> Result<Record, AdrError> {
        let record = extract_record(&document.path, &document.events)?;
        validate_record(&record, &self.schema)?;
        Ok(record)
    }
}
