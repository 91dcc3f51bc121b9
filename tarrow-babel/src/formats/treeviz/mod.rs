//! Treeviz formatter for the node tree
//!
//! A visual representation of the parsed document, one line per key:
//!
//! ⧉ Document (2 keys)
//! ├─ ◦ a = 10
//! └─ ☰ server (2 keys)
//!   ├─ ◦ port = 8080
//!   └─ ⊕ fallback = ?(a)
//!
//! Icons
//!     Document: ⧉
//!     Table: ☰
//!     Scalar: ◦
//!     Reference: ⊕
//!     Text: ¶
//!     Unsupported: ⊘

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Document, Node, Table};

/// Get the Unicode icon for a node kind
pub fn get_icon(node: &Node) -> &'static str {
    match node {
        Node::Table(_) => "☰",
        Node::Scalar(_) => "◦",
        Node::Reference(_) => "⊕",
        Node::Text(_) => "¶",
        Node::Unsupported(_) => "⊘",
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::Scalar(number) => format!(" = {number}"),
        Node::Reference(target) => format!(" = ?({target})"),
        Node::Text(text) => format!(" = {text:?}"),
        Node::Unsupported(kind) => format!(" ({kind})"),
        Node::Table(table) => format!(" ({} keys)", table.len()),
    }
}

fn format_table(table: &Table, prefix: &str, output: &mut String) {
    let count = table.len();
    for (index, (key, node)) in table.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{prefix}{connector} {} {key}{}\n",
            get_icon(node),
            label(node)
        ));
        if let Node::Table(child) = node {
            let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
            format_table(child, &child_prefix, output);
        }
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("⧉ Document ({} keys)\n", doc.root.len());
    format_table(&doc.root, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
