//! JSON format implementation
//!
//! Dumps the node tree with `serde_json`. Every value is tagged with its kind, so the
//! output shows exactly how the source was lowered (reference vs. plain string, integer
//! vs. float).

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Node tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&doc.root)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
