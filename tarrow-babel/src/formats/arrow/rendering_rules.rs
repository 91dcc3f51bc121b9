use serde::{Deserialize, Serialize};

/// Configuration for the arrow serializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRules {
    /// String repeated once per nesting level inside blocks
    pub indent_string: String,

    /// Whether `#` comment lines of the source are carried into the output
    pub preserve_comments: bool,
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            indent_string: "    ".to_string(),
            preserve_comments: true,
        }
    }
}
