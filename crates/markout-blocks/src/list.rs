//! List conversions.
//!
//! A list node's children are list items; an item's children are blocks
//! (usually a paragraph, possibly followed by a nested list). Attributes
//! on the list node: `ordered` ("true" for numbered lists), `start`
//! (first number, default 1) and `tight` ("false" for loose lists whose
//! items are separated by a blank line).

use markout::{dispatch, ConversionMap, Node};

pub const LIST: &str = "list";
pub const LIST_ITEM: &str = "listitem";

/// A bullet list container.
pub fn bulleted_list() -> Node {
    Node::container(LIST)
}

/// A numbered list container starting at `start`.
pub fn ordered_list(start: u32) -> Node {
    Node::container(LIST)
        .with_attr("ordered", "true")
        .with_attr("start", &start.to_string())
}

/// A list item container; children are blocks.
pub fn list_item() -> Node {
    Node::container(LIST_ITEM)
}

pub fn list_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();
    map.on(LIST, convert_list);
    map
}

fn convert_list(node: &Node, state: &mut markout::State) {
    let ordered = node.attr("ordered") == Some("true");
    let start: u32 = node
        .attr("start")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let tight = node.attr("tight") != Some("false");

    // Two lists back to back need two blank lines, otherwise a Markdown
    // parser reads them as one list.
    if state.pending_block() == Some(LIST) {
        state.flush_pending_close(3);
    }

    let bullet = state.options().bullet_list_marker;
    for (i, item) in node.children().enumerate() {
        if i > 0 && tight {
            state.flush_pending_close(1);
        }
        let marker = if ordered {
            format!("{}. ", start + i as u32)
        } else {
            format!("{} ", bullet)
        };
        // Continuation lines align under the item text.
        let indent = " ".repeat(marker.len());
        state.wrap_block(&indent, Some(&marker), node, |st| {
            for (j, block) in item.children().enumerate() {
                if j > 0 && tight {
                    st.flush_pending_close(1);
                }
                dispatch(block, st);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_conversions;
    use crate::quote::quote;
    use markout::{ExportOptions, MarkdownExporter};

    fn export(root: &Node) -> String {
        MarkdownExporter::with_maps(block_conversions())
            .export(root)
            .unwrap()
    }

    fn item_with_text(text: &str) -> Node {
        list_item().with_child(Node::paragraph().with_child(Node::text(text)))
    }

    #[test]
    fn test_tight_bullet_list() {
        let root = Node::root().with_child(
            bulleted_list()
                .with_child(item_with_text("a"))
                .with_child(item_with_text("b")),
        );
        assert_eq!(export(&root), "- a\n- b");
    }

    #[test]
    fn test_loose_list_separates_items() {
        let root = Node::root().with_child(
            bulleted_list()
                .with_attr("tight", "false")
                .with_child(item_with_text("a"))
                .with_child(item_with_text("b")),
        );
        assert_eq!(export(&root), "- a\n\n- b");
    }

    #[test]
    fn test_ordered_list_with_start() {
        let root = Node::root().with_child(
            ordered_list(3)
                .with_child(item_with_text("third"))
                .with_child(item_with_text("fourth")),
        );
        assert_eq!(export(&root), "3. third\n4. fourth");
    }

    #[test]
    fn test_nested_list_indents_under_marker() {
        let root = Node::root().with_child(
            bulleted_list().with_child(
                list_item()
                    .with_child(Node::paragraph().with_child(Node::text("outer")))
                    .with_child(bulleted_list().with_child(item_with_text("inner"))),
            ),
        );
        assert_eq!(export(&root), "- outer\n  - inner");
    }

    #[test]
    fn test_consecutive_lists_get_two_blank_lines() {
        let root = Node::root()
            .with_child(bulleted_list().with_child(item_with_text("a")))
            .with_child(bulleted_list().with_child(item_with_text("b")));
        assert_eq!(export(&root), "- a\n\n\n- b");
    }

    #[test]
    fn test_list_then_paragraph() {
        let root = Node::root()
            .with_child(bulleted_list().with_child(item_with_text("a")))
            .with_child(Node::paragraph().with_child(Node::text("after")));
        assert_eq!(export(&root), "- a\n\nafter");
    }

    #[test]
    fn test_list_inside_quote() {
        let root = Node::root().with_child(
            quote().with_child(
                bulleted_list()
                    .with_child(item_with_text("a"))
                    .with_child(item_with_text("b")),
            ),
        );
        assert_eq!(export(&root), "> - a\n> - b");
    }

    #[test]
    fn test_custom_bullet_marker() {
        let options = ExportOptions {
            bullet_list_marker: '*',
            ..Default::default()
        };
        let exporter = MarkdownExporter::with_maps(block_conversions()).with_options(options);
        let root = Node::root().with_child(bulleted_list().with_child(item_with_text("a")));
        assert_eq!(exporter.export(&root).unwrap(), "* a");
    }
}
