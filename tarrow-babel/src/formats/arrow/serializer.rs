//! Arrow dialect serializer.
//!
//! Walks the top-level table in source order. Scalars and references become
//! `<value> -> <name>` lines, tables become named blocks:
//!
//! ```text
//! " a comment
//! 10 -> a
//! ([
//!     inner : ([
//!         x : 10,
//!     ]),
//! ]) -> outer
//! ```
//!
//! Each top-level binding is recorded in a [`SymbolTable`] owned by the serializer,
//! so `?(name)` references resolve to text rendered earlier in the same conversion.

use super::rendering_rules::RenderRules;
use crate::common::comments::extract_comments;
use crate::common::identifier::validate;
use crate::common::symbols::SymbolTable;
use crate::error::ConversionError;
use crate::ir::nodes::{Document, Node, Table};
use tracing::{debug, trace};

/// Result of a finished conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub text: String,
    /// Constants bound while converting, keyed by top-level name
    pub symbols: SymbolTable,
}

pub struct ArrowSerializer {
    rules: RenderRules,
    symbols: SymbolTable,
}

impl ArrowSerializer {
    pub fn new(rules: RenderRules) -> Self {
        Self {
            rules,
            symbols: SymbolTable::new(),
        }
    }

    pub fn serialize(self, doc: &Document) -> Result<String, ConversionError> {
        self.convert(doc).map(|conversion| conversion.text)
    }

    /// Convert the whole document. Consumes the serializer, so constants never leak
    /// from one conversion into another.
    pub fn convert(mut self, doc: &Document) -> Result<Conversion, ConversionError> {
        let comments = if self.rules.preserve_comments {
            extract_comments(&doc.source)
        } else {
            Vec::new()
        };

        let mut lines = Vec::new();
        let mut position = 0;
        for (key, value) in doc.root.iter() {
            validate(key)?;

            // Comments are looked up by top-level item index, not by the source line
            // the item sits on. A document whose n-th line is not the comment above its
            // n-th key gets comments attached to the wrong binding (or moved to the end).
            if let Some(Some(comment)) = comments.get(position) {
                trace!(line = position, "emitting comment");
                lines.push(comment.clone());
            }

            lines.push(self.bind(key, value)?);
            position += 1;
        }

        lines.extend(comments.iter().skip(position).flatten().cloned());

        debug!(
            bindings = position,
            constants = self.symbols.len(),
            "converted document"
        );
        Ok(Conversion {
            text: lines.join("\n"),
            symbols: self.symbols,
        })
    }

    /// Render one top-level binding and record its value as a constant.
    fn bind(&mut self, key: &str, value: &Node) -> Result<String, ConversionError> {
        let (line, constant) = match value {
            Node::Table(table) => (
                self.render_named(key, table, 0)?,
                self.render_nested(table, 0)?,
            ),
            other => {
                let rendered = self.render_value(other, 0)?;
                (format!("{rendered} -> {key}"), rendered)
            }
        };
        debug!(%key, kind = value.kind_name(), "bound constant");
        self.symbols.define(key, constant);
        Ok(line)
    }

    /// Render a single value at nesting `depth`.
    pub fn render_value(&self, node: &Node, depth: usize) -> Result<String, ConversionError> {
        match node {
            Node::Scalar(number) => Ok(number.to_string()),
            Node::Reference(target) => {
                validate(target)?;
                self.symbols.resolve(target).map(str::to_string)
            }
            Node::Table(table) => self.render_nested(table, depth),
            Node::Text(_) | Node::Unsupported(_) => Err(ConversionError::UnsupportedType(
                node.kind_name().to_string(),
            )),
        }
    }

    /// Render an anonymous block, as embedded in a parent block or a constant.
    pub fn render_nested(&self, table: &Table, depth: usize) -> Result<String, ConversionError> {
        let indent = self.rules.indent_string.repeat(depth);
        let mut out = String::from("([\n");
        for (key, node) in table.iter() {
            validate(key)?;
            let value = self.render_value(node, depth + 1)?;
            out.push_str(&format!(
                "{indent}{unit}{key} : {value},\n",
                unit = self.rules.indent_string
            ));
        }
        out.push_str(&indent);
        out.push_str("])");
        Ok(out)
    }

    /// Render a block bound to `name`: the nested form followed by ` -> name`.
    pub fn render_named(
        &self,
        name: &str,
        table: &Table,
        depth: usize,
    ) -> Result<String, ConversionError> {
        validate(name)?;
        let block = self.render_nested(table, depth)?;
        Ok(format!("{block} -> {name}"))
    }
}
