//! Core data structures for the node tree.
//!
//! The tree is produced once by a parsing format (see ../formats/toml) and is never
//! mutated afterwards. Tables keep their members in source order.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) if value.is_nan() => f.write_str("nan"),
            Number::Float(value) if value.is_infinite() => {
                f.write_str(if value.is_sign_positive() { "inf" } else { "-inf" })
            }
            // Debug keeps the fractional part on whole floats ("1.0", not "1")
            Number::Float(value) => {
                let text = format!("{value:?}");
                match text.split_once('e') {
                    // Exponents carry a sign and at least two digits ("1e+20", "1e-05")
                    Some((mantissa, exponent)) => {
                        let (sign, digits) = match exponent.strip_prefix('-') {
                            Some(digits) => ('-', digits),
                            None => ('+', exponent),
                        };
                        write!(f, "{mantissa}e{sign}{digits:0>2}")
                    }
                    None => f.write_str(&text),
                }
            }
        }
    }
}

/// A value in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    Scalar(Number),
    /// A string without reference syntax. It has no literal form in the dialect.
    Text(String),
    /// A `?(name)` string, holding the raw text between the parentheses.
    Reference(String),
    Table(Table),
    /// A TOML value with no form in the dialect (boolean, datetime, array), named
    /// by its TOML kind. Rejected when the conversion reaches it.
    Unsupported(&'static str),
}

impl Node {
    /// Short human name of the node kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Scalar(Number::Integer(_)) => "integer",
            Node::Scalar(Number::Float(_)) => "float",
            Node::Text(_) => "string",
            Node::Reference(_) => "reference",
            Node::Table(_) => "table",
            Node::Unsupported(kind) => kind,
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Number::Integer(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Scalar(Number::Integer(value.into()))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Number::Float(value))
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

/// An ordered mapping of names to nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    entries: Vec<(String, Node)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member at the end, or replace an existing member in place.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) {
        let key = key.into();
        let node = node.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    /// Builder-style variant of [`Table::insert`].
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Node)> for Table {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, node) in iter {
            table.insert(key, node);
        }
        table
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// A parsed document: the top-level table plus the raw text it came from.
///
/// The raw text is kept because comment lines never make it into the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub root: Table,
    #[serde(skip)]
    pub source: String,
}

impl Document {
    pub fn new(root: Table, source: impl Into<String>) -> Self {
        Self {
            root,
            source: source.into(),
        }
    }
}
