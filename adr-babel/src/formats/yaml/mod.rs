//! YAML serialization of the tag index, same shape as the JSON output.

use crate::error::FormatError;
use crate::format::Format;
use adr_parser::adr::TagIndex;

/// Format implementation for YAML
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Tag index as YAML"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, index: &TagIndex) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(index)?)
    }
}
