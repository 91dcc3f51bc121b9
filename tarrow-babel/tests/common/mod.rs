//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;
use tarrow_babel::{translate, ConversionError, FormatError};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// Convert and fail the test on any error.
pub fn convert(source: &str) -> String {
    translate(source).unwrap_or_else(|e| panic!("conversion failed: {e}\nsource:\n{source}"))
}

/// Convert and return the conversion error, failing the test on success or other errors.
pub fn conversion_error(source: &str) -> ConversionError {
    match translate(source) {
        Err(FormatError::Conversion(err)) => err,
        other => panic!("expected a conversion error, got {other:?}"),
    }
}
