//! Identifier grammar of the arrow dialect: `[A-Za-z_][A-Za-z0-9_]*`.

use crate::error::ConversionError;

/// Whether `name` is a valid dialect identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Checks a table key, top-level key or reference target.
pub fn validate(name: &str) -> Result<(), ConversionError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ConversionError::InvalidName(name.to_string()))
    }
}
