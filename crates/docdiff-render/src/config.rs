use serde::{Deserialize, Serialize};

/// Configuration for report rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level, both for the report itself and for the
    /// structural dump of added or removed subtrees.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl RenderConfig {
    /// A configuration with a custom indentation width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }
}
