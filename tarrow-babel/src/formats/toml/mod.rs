//! TOML format implementation
//!
//! Parsing is delegated to the `toml` crate (built with `preserve_order`, so tables
//! come back in source order). This module only lowers the parsed table into the node
//! tree and keeps the raw text for comment recovery.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::from_toml::from_toml_table;
use crate::ir::nodes::Document;
use tracing::debug;

#[derive(Default)]
pub struct TomlFormat;

impl Format for TomlFormat {
    fn name(&self) -> &str {
        "toml"
    }

    fn description(&self) -> &str {
        "TOML configuration document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["toml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let table: ::toml::Table = source
            .parse()
            .map_err(|e: ::toml::de::Error| FormatError::ParseError(e.to_string()))?;
        let root = from_toml_table(&table);
        debug!(keys = root.len(), "parsed toml document");
        Ok(Document::new(root, source))
    }
}
