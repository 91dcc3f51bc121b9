//! Functional entry points for the toml → arrow pipeline
//!
//! These wrap the registry-free path: parse with [`TomlFormat`], serialize with
//! [`ArrowSerializer`]. Each call builds a fresh serializer, so repeated or concurrent
//! conversions never share constants.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::arrow::rendering_rules::RenderRules;
use crate::formats::arrow::serializer::{ArrowSerializer, Conversion};
use crate::formats::toml::TomlFormat;
use crate::ir::nodes::Document;

/// Serialize a Document to the arrow dialect with default rendering rules
pub fn serialize_to_arrow(doc: &Document) -> Result<String, FormatError> {
    serialize_to_arrow_with_rules(doc, RenderRules::default())
}

/// Serialize a Document to the arrow dialect with custom rendering rules
///
/// # Example
///
/// ```ignore
/// let rules = RenderRules { indent_string: "  ".to_string(), ..Default::default() };
/// let text = serialize_to_arrow_with_rules(&doc, rules)?;
/// ```
pub fn serialize_to_arrow_with_rules(
    doc: &Document,
    rules: RenderRules,
) -> Result<String, FormatError> {
    Ok(ArrowSerializer::new(rules).serialize(doc)?)
}

/// Convert TOML source text to the arrow dialect
///
/// # Example
///
/// ```ignore
/// assert_eq!(translate("a = 10")?, "10 -> a");
/// ```
pub fn translate(source: &str) -> Result<String, FormatError> {
    translate_with_rules(source, RenderRules::default())
}

pub fn translate_with_rules(source: &str, rules: RenderRules) -> Result<String, FormatError> {
    let doc = TomlFormat.parse(source)?;
    serialize_to_arrow_with_rules(&doc, rules)
}

/// Convert TOML source text and keep the constants bound along the way
pub fn convert_source(source: &str, rules: RenderRules) -> Result<Conversion, FormatError> {
    let doc = TomlFormat.parse(source)?;
    Ok(ArrowSerializer::new(rules).convert(&doc)?)
}
