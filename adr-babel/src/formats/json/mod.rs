//! JSON serialization of the tag index
//!
//!     The output is a list of `{ "tag", "records" }` objects, tags ascending, each record as
//!     `{ "heading", "meta": { "index", "authors", "date", "status", "tags", "path" } }`.
//!     Dates are `YYYY-MM-DD` strings.

use crate::error::FormatError;
use crate::format::Format;
use adr_parser::adr::TagIndex;

/// Format implementation for pretty printed JSON
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Tag index as pretty printed JSON"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, index: &TagIndex) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(index)?;
        output.push('\n');
        Ok(output)
    }
}
