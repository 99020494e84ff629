//! Configuration for Markdown output.

/// Options controlling the Markdown flavor of emitted output.
///
/// These only affect markers that have several common spellings; the
/// structural rules (delimiter stacking, blank-line spacing) are fixed.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Marker for bullet list items.
    pub bullet_list_marker: char,

    /// Fence string for fenced code blocks.
    pub fence: String,

    /// Horizontal rule string.
    pub hr: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
            fence: "```".to_string(),
            hr: "---".to_string(),
        }
    }
}
