//! Thematic break and image conversions.

use markout::{ConversionMap, InlineRun, Node};

pub const HORIZONTAL_RULE: &str = "horizontalrule";
pub const IMAGE: &str = "image";

pub fn horizontal_rule() -> Node {
    Node::leaf(HORIZONTAL_RULE)
}

/// An inline image leaf.
pub fn image(src: &str, alt: &str) -> Node {
    Node::leaf(IMAGE)
        .with_attr("src", src)
        .with_attr("alt", alt)
}

pub fn media_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();

    map.on(HORIZONTAL_RULE, |node, state| {
        let hr = state.options().hr.clone();
        state.write(&hr);
        state.close_block(node);
    });

    // Images are inline content: the rendered syntax joins the inline
    // buffer so an image between two text runs keeps its position.
    map.on(IMAGE, |node, state| {
        let alt = node.attr("alt").unwrap_or("");
        let src = node.attr("src").unwrap_or("");
        let rendered = match node.title() {
            Some(title) => format!("![{}]({} \"{}\")", alt, src, title),
            None => format!("![{}]({})", alt, src),
        };
        state.push_inline_run(InlineRun::plain(rendered));
    });

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_conversions;
    use markout::MarkdownExporter;

    fn export(root: &Node) -> String {
        MarkdownExporter::with_maps(block_conversions())
            .export(root)
            .unwrap()
    }

    #[test]
    fn test_horizontal_rule_between_paragraphs() {
        let root = Node::root()
            .with_child(Node::paragraph().with_child(Node::text("a")))
            .with_child(horizontal_rule())
            .with_child(Node::paragraph().with_child(Node::text("b")));
        assert_eq!(export(&root), "a\n\n---\n\nb");
    }

    #[test]
    fn test_image_in_paragraph() {
        let root = Node::root().with_child(
            Node::paragraph()
                .with_child(Node::text("see "))
                .with_child(image("cat.png", "a cat")),
        );
        assert_eq!(export(&root), "see ![a cat](cat.png)");
    }

    #[test]
    fn test_image_with_title() {
        let root = Node::root().with_child(
            Node::paragraph().with_child(image("cat.png", "cat").with_title("A cat")),
        );
        assert_eq!(export(&root), "![cat](cat.png \"A cat\")");
    }
}
