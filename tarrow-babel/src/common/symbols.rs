//! Constant table for top-level bindings.
//!
//! One table lives for exactly one conversion. Entries are added in top-level order,
//! so lookups only ever see constants bound earlier in the document.

use crate::error::ConversionError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Maps a top-level key to its rendered text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    constants: BTreeMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to its rendered text. TOML keys are unique, so a name is bound once.
    pub fn define(&mut self, name: impl Into<String>, rendered: impl Into<String>) {
        self.constants.insert(name.into(), rendered.into());
    }

    /// Rendered text of a previously bound constant.
    pub fn resolve(&self, name: &str) -> Result<&str, ConversionError> {
        self.constants
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConversionError::UndefinedConstant(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_defined_constants() {
        let mut symbols = SymbolTable::new();
        symbols.define("a", "10");
        assert_eq!(symbols.resolve("a"), Ok("10"));
        assert!(symbols.contains("a"));
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn undefined_constant_fails() {
        let symbols = SymbolTable::new();
        assert_eq!(
            symbols.resolve("missing"),
            Err(ConversionError::UndefinedConstant("missing".to_string()))
        );
        assert!(symbols.is_empty());
    }
}
