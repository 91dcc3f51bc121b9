//! Lowering of `toml` values into the node tree.
//!
//! The node tree is closed: anything TOML can express that the dialect cannot
//! (booleans, datetimes, arrays) is kept as [`Node::Unsupported`] and rejected by
//! the conversion when it reaches that key, after the keys before it.

use super::nodes::{Node, Table};
use toml::Value;

/// Lower a TOML table, keeping member order.
pub fn from_toml_table(table: &toml::Table) -> Table {
    table
        .iter()
        .map(|(key, value)| (key.clone(), from_toml_value(value)))
        .collect()
}

pub fn from_toml_value(value: &Value) -> Node {
    match value {
        Value::Integer(v) => Node::from(*v),
        Value::Float(v) => Node::from(*v),
        Value::String(s) => lower_string(s),
        Value::Table(t) => Node::Table(from_toml_table(t)),
        other => Node::Unsupported(other.type_str()),
    }
}

/// Returns the text between `?(` and `)` when `text` has reference syntax.
///
/// The target is not validated here; `?()` yields an empty target.
pub fn reference_target(text: &str) -> Option<&str> {
    text.strip_prefix("?(")?.strip_suffix(')')
}

fn lower_string(text: &str) -> Node {
    match reference_target(text) {
        Some(target) => Node::Reference(target.to_string()),
        None => Node::Text(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::Number;

    fn lower(source: &str) -> Table {
        let table: toml::Table = source.parse().expect("valid toml");
        from_toml_table(&table)
    }

    #[test]
    fn test_reference_target() {
        assert_eq!(reference_target("?(a)"), Some("a"));
        assert_eq!(reference_target("?()"), Some(""));
        assert_eq!(reference_target("?(a"), None);
        assert_eq!(reference_target("a)"), None);
        assert_eq!(reference_target("plain"), None);
    }

    #[test]
    fn test_lower_scalars_and_strings() {
        let table = lower("a = 10\nb = 1.5\nc = \"?(a)\"\nd = \"hello\"");
        assert_eq!(table.get("a"), Some(&Node::Scalar(Number::Integer(10))));
        assert_eq!(table.get("b"), Some(&Node::Scalar(Number::Float(1.5))));
        assert_eq!(table.get("c"), Some(&Node::Reference("a".to_string())));
        assert_eq!(table.get("d"), Some(&Node::Text("hello".to_string())));
    }

    #[test]
    fn test_lower_keeps_source_order() {
        let table = lower("zeta = 1\nalpha = 2\n[mid]\nx = 3");
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_lower_dotted_headers_nest() {
        let table = lower("[dog.\"tamer_man\".cat]\ntype = 42");
        let Some(Node::Table(dog)) = table.get("dog") else {
            panic!("expected dog table");
        };
        let Some(Node::Table(tamer)) = dog.get("tamer_man") else {
            panic!("expected tamer_man table");
        };
        assert!(matches!(tamer.get("cat"), Some(Node::Table(_))));
    }

    #[test]
    fn test_lower_marks_unrepresentable_kinds() {
        let table = lower("flag = true\nlist = [1, 2]\n[t]\nwhen = 1979-05-27");
        assert_eq!(table.get("flag"), Some(&Node::Unsupported("boolean")));
        assert_eq!(table.get("list"), Some(&Node::Unsupported("array")));
        let Some(Node::Table(t)) = table.get("t") else {
            panic!("expected t table");
        };
        assert_eq!(t.get("when"), Some(&Node::Unsupported("datetime")));
    }
}
