//! Comment extraction from raw TOML source.
//!
//! TOML parsers drop comments, so they are recovered from the raw text. The result is
//! indexed by raw source line: entry `n` is the rendered comment on line `n`, if any.

/// Render every source line, `None` for lines that are not comments.
pub fn extract_comments(source: &str) -> Vec<Option<String>> {
    source.split('\n').map(render_comment).collect()
}

/// Render a single line as a dialect comment (`"text`), if it is a `#` comment.
///
/// Surrounding whitespace and every leading `#` are dropped; the space that usually
/// follows the marker is kept.
pub fn render_comment(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    Some(format!("\"{}", trimmed.trim_start_matches('#')))
}
