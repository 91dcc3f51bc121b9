//! Arrow format implementation
//!
//! The arrow dialect binds values to names with `->`, writes tables as `([ ... ])`
//! blocks and keeps `#` comments as lines starting with `"`. It can only be produced,
//! never parsed back.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{parse_bool_flag, reject_unknown_options};
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub mod rendering_rules;
pub mod serializer;

use rendering_rules::RenderRules;
use serializer::ArrowSerializer;

/// Parameters understood by [`ArrowFormat::serialize_with_options`].
pub const ARROW_OPTIONS: &[&str] = &["indent", "comments"];

#[derive(Default)]
pub struct ArrowFormat {
    rules: RenderRules,
}

impl ArrowFormat {
    pub fn new(rules: RenderRules) -> Self {
        Self { rules }
    }

    /// Rules after applying `indent` / `comments` overrides.
    fn rules_with_options(
        &self,
        options: &HashMap<String, String>,
    ) -> Result<RenderRules, FormatError> {
        reject_unknown_options(self.name(), options, ARROW_OPTIONS)?;
        let mut rules = self.rules.clone();
        if let Some(indent) = options.get("indent") {
            rules.indent_string = indent.clone();
        }
        rules.preserve_comments = parse_bool_flag(options, "comments", rules.preserve_comments)?;
        Ok(rules)
    }
}

impl Format for ArrowFormat {
    fn name(&self) -> &str {
        "arrow"
    }

    fn description(&self) -> &str {
        "Arrow configuration dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["arrow", "conf"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let serializer = ArrowSerializer::new(self.rules.clone());
        Ok(serializer.serialize(doc)?)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let rules = self.rules_with_options(options)?;
        Ok(ArrowSerializer::new(rules).serialize(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::ir::nodes::{Node, Table};

    fn sample() -> Document {
        let root = Table::new()
            .with("a", 1)
            .with("t", Table::new().with("x", Node::Reference("a".to_string())));
        Document::new(root, "# c\na = 1\nt = { x = \"?(a)\" }")
    }

    #[test]
    fn test_arrow_format_name() {
        let format = ArrowFormat::default();
        assert_eq!(format.name(), "arrow");
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_arrow_parse_not_supported() {
        let format = ArrowFormat::default();
        assert!(matches!(
            format.parse("10 -> a"),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn test_arrow_serialize() {
        let out = ArrowFormat::default().serialize(&sample()).unwrap();
        assert_eq!(out, "\" c\n1 -> a\n([\n    x : 1,\n]) -> t");
    }

    #[test]
    fn test_arrow_serialize_with_options() {
        let mut options = HashMap::new();
        options.insert("indent".to_string(), "  ".to_string());
        options.insert("comments".to_string(), "false".to_string());
        let out = ArrowFormat::default()
            .serialize_with_options(&sample(), &options)
            .unwrap();
        assert_eq!(out, "1 -> a\n([\n  x : 1,\n]) -> t");
    }

    #[test]
    fn test_arrow_rejects_unknown_option() {
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "dark".to_string());
        let result = ArrowFormat::default().serialize_with_options(&sample(), &options);
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_arrow_conversion_errors_surface() {
        let doc = Document::new(Table::new().with("1a", 10), "1a = 10");
        assert_eq!(
            ArrowFormat::default().serialize(&doc),
            Err(FormatError::Conversion(ConversionError::InvalidName(
                "1a".to_string()
            )))
        );
    }
}
