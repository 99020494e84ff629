//! Fenced code block conversion.

use markout::{ConversionMap, Node};

pub const CODE_BLOCK: &str = "codeblock";

/// A code block leaf carrying its source text and an optional language.
pub fn code_block(language: Option<&str>, code: &str) -> Node {
    let node = Node::leaf(CODE_BLOCK).with_text(code);
    match language {
        Some(language) => node.with_attr("language", language),
        None => node,
    }
}

pub fn code_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();
    map.on(CODE_BLOCK, |node, state| {
        let fence = state.options().fence.clone();
        let mut opening = fence.clone();
        if let Some(language) = node.attr("language") {
            opening.push_str(language);
        }
        state.write(&opening);
        state.ensure_newline();
        // Through text() so a surrounding delimiter prefixes every line.
        state.text(node.text_content());
        state.ensure_newline();
        state.write(&fence);
        state.close_block(node);
    });
    map
}
