//! CLI-specific inspect transforms
//!
//! Each transform is a stage + format combination (e.g., "node-json", "symbols-json").
//!
//! ## Transform Pipeline
//!
//! 1. **Comment recovery** - Raw text → comment lines by source line
//!    - `comments-json`: every comment line with its 0-based source line
//!
//! 2. **Parsing** - Raw text → node tree
//!    - `node-json`: node tree as JSON
//!    - `node-treeviz`: node tree as an icon tree
//!
//! 3. **Conversion** - Node tree → arrow text + constants
//!    - `symbols-json`: the constants bound during conversion
//!
//! Example: `tarrow inspect settings.toml symbols-json`

use serde_json::json;
use tarrow_babel::common::comments::extract_comments;
use tarrow_babel::formats::json::JsonFormat;
use tarrow_babel::formats::toml::TomlFormat;
use tarrow_babel::formats::treeviz::to_treeviz_str;
use tarrow_babel::transforms::convert_source;
use tarrow_babel::{Format, FormatError, RenderRules};

/// All available inspect transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["node-json", "node-treeviz", "comments-json", "symbols-json"];

/// Execute a named transform on TOML source text
///
/// `rules` only matter for `symbols-json`, where table constants are rendered with
/// the configured indentation.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    rules: &RenderRules,
) -> Result<String, FormatError> {
    match transform_name {
        "node-json" => JsonFormat.serialize(&TomlFormat.parse(source)?),
        "node-treeviz" => Ok(to_treeviz_str(&TomlFormat.parse(source)?)),
        "comments-json" => {
            let comments: Vec<_> = extract_comments(source)
                .into_iter()
                .enumerate()
                .filter_map(|(line, comment)| {
                    comment.map(|text| json!({ "line": line, "text": text }))
                })
                .collect();
            to_pretty_json(&comments)
        }
        "symbols-json" => {
            let conversion = convert_source(source, rules.clone())?;
            to_pretty_json(&conversion.symbols)
        }
        other => Err(FormatError::NotSupported(format!(
            "Unknown transform '{other}'"
        ))),
    }
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(value).map_err(|e| FormatError::SerializationError(e.to_string()))
}
