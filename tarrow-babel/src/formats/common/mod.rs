//! Option parsing shared by formats that accept `--extra-*` parameters.

use crate::error::FormatError;
use std::collections::HashMap;

/// Read a boolean option. A present but empty value counts as `true`.
pub fn parse_bool_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key) {
        Some(value) => parse_bool(key, value),
        None => Ok(default),
    }
}

/// Parse the value given to `--extra-<key>`.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, FormatError> {
    if value.is_empty() {
        return Ok(true);
    }
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for --extra-{key}"
        ))),
    }
}

/// Reject any option not listed in `known`.
pub fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support parameter(s): {}",
        unknown.join(", ")
    )))
}
