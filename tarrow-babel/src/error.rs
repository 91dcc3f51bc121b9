//! Error types for format operations and conversions

use thiserror::Error;

/// User-input errors raised while converting a document to the arrow dialect.
///
/// All variants are fatal: a conversion either succeeds as a whole or reports one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A key or reference target does not match the identifier grammar
    #[error("Invalid name: '{0}'")]
    InvalidName(String),
    /// A reference names a top-level constant that is not (yet) defined
    #[error("Constant {0} not defined")]
    UndefinedConstant(String),
    /// A value has no representation in the dialect
    #[error("Unsupported value type: {0}")]
    UnsupportedType(String),
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// The document could not be expressed in the target dialect
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_messages() {
        assert_eq!(
            ConversionError::InvalidName("1a".to_string()).to_string(),
            "Invalid name: '1a'"
        );
        assert_eq!(
            ConversionError::UndefinedConstant("b".to_string()).to_string(),
            "Constant b not defined"
        );
    }

    #[test]
    fn conversion_error_is_transparent() {
        let err: FormatError = ConversionError::UnsupportedType("boolean".to_string()).into();
        assert_eq!(err.to_string(), "Unsupported value type: boolean");
        assert!(matches!(err, FormatError::Conversion(_)));
    }
}
