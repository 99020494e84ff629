//! The exporter: binds conversion maps and produces Markdown from a tree.

use crate::conversions::{builtin_conversions, ConversionMap, Registry};
use crate::dispatch::{dispatch, dispatch_children};
use crate::node::Node;
use crate::options::ExportOptions;
use crate::state::State;
use crate::{ExportError, Result};

/// Converts document trees to Markdown.
///
/// Holds the merged conversion registry (built-ins first, then extension
/// maps in registration order) and the output options. One exporter can
/// serve any number of `export` calls; each call owns an independent
/// [`State`].
pub struct MarkdownExporter {
    registry: Registry,
    options: ExportOptions,
}

impl MarkdownExporter {
    /// An exporter with the built-in conversions only.
    pub fn new() -> Self {
        Self::with_maps(Vec::new())
    }

    /// An exporter with the built-in conversions plus extension maps.
    pub fn with_maps(extra_maps: Vec<ConversionMap>) -> Self {
        let mut maps = vec![builtin_conversions()];
        maps.extend(extra_maps);
        Self {
            registry: Registry::new(maps),
            options: ExportOptions::default(),
        }
    }

    /// Replace the output options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a further extension map (after all existing maps).
    pub fn add_map(&mut self, map: ConversionMap) -> &mut Self {
        self.registry.push(map);
        self
    }

    /// Serialize a tree to Markdown.
    ///
    /// The root is dispatched like any node when a conversion claims it;
    /// an unclaimed container root falls back to walking its children, so
    /// custom root kinds work without registering a conversion for them.
    /// An unclaimed leaf root has nothing to walk and is reported as an
    /// error rather than silently yielding an empty document.
    pub fn export(&self, root: &Node) -> Result<String> {
        let mut state = State::new(&self.registry, self.options.clone());

        if self.registry.resolve(root).is_some() {
            dispatch(root, &mut state);
        } else if root.is_container() {
            dispatch_children(root, &mut state);
        } else {
            return Err(ExportError::UnconvertibleRoot(
                root.node_type().to_string(),
            ));
        }

        // A bare inline root (e.g. a single text node) buffers runs that
        // no enclosing region will flush.
        state.flush_inline();
        Ok(state.into_output())
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind the built-in map plus `extra_maps` and return a function from a
/// root node to Markdown text.
pub fn generate_markdown(
    extra_maps: Vec<ConversionMap>,
) -> impl Fn(&Node) -> Result<String> {
    let exporter = MarkdownExporter::with_maps(extra_maps);
    move |root| exporter.export(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::Conversion;
    use crate::format::Format;

    #[test]
    fn test_document_with_heading_and_paragraphs() {
        let root = Node::root()
            .with_child(Node::heading(1).with_child(Node::text("Title")))
            .with_child(Node::paragraph().with_child(Node::text("First paragraph.")))
            .with_child(Node::paragraph().with_child(Node::text("Second paragraph.")));
        let exporter = MarkdownExporter::new();
        assert_eq!(
            exporter.export(&root).unwrap(),
            "# Title\n\nFirst paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn test_generate_markdown_binding() {
        let to_markdown = generate_markdown(Vec::new());
        let root = Node::root()
            .with_child(Node::paragraph().with_child(Node::text("hi").with_format(Format::Bold)));
        assert_eq!(to_markdown(&root).unwrap(), "**hi**");
    }

    #[test]
    fn test_unclaimed_container_root_walks_children() {
        let root = Node::container("custom-root")
            .with_child(Node::paragraph().with_child(Node::text("body")));
        let exporter = MarkdownExporter::new();
        assert_eq!(exporter.export(&root).unwrap(), "body");
    }

    #[test]
    fn test_unclaimed_leaf_root_is_an_error() {
        let exporter = MarkdownExporter::new();
        let err = exporter.export(&Node::leaf("mystery")).unwrap_err();
        assert!(matches!(err, ExportError::UnconvertibleRoot(t) if t == "mystery"));
    }

    #[test]
    fn test_bare_text_root_flushes_its_run() {
        let exporter = MarkdownExporter::new();
        let node = Node::text("hi").with_format(Format::Bold);
        assert_eq!(exporter.export(&node).unwrap(), "**hi**");
    }

    #[test]
    fn test_extension_map_overrides_builtin_with_priority() {
        let mut map = ConversionMap::new();
        map.insert(crate::node::PARAGRAPH, |_| {
            Some(Conversion::with_priority(
                |node: &Node, state: &mut crate::state::State| {
                    crate::dispatch::dispatch_inline_region(node, state);
                    state.write(" [!]");
                    state.close_block(node);
                },
                1,
            ))
        });
        let exporter = MarkdownExporter::with_maps(vec![map]);
        let root = Node::root().with_child(Node::paragraph().with_child(Node::text("x")));
        assert_eq!(exporter.export(&root).unwrap(), "x [!]");
    }

    #[test]
    fn test_extension_map_same_priority_loses_to_builtin() {
        let mut map = ConversionMap::new();
        map.on(crate::node::PARAGRAPH, |_, state| state.write("override"));
        let exporter = MarkdownExporter::with_maps(vec![map]);
        let root = Node::root().with_child(Node::paragraph().with_child(Node::text("x")));
        assert_eq!(exporter.export(&root).unwrap(), "x");
    }

    #[test]
    fn test_custom_node_kind_via_extension_map() {
        let mut map = ConversionMap::new();
        map.on("callout", |node, state| {
            state.wrap_block("> ", None, node, |st| {
                crate::dispatch::dispatch_children(node, st);
            });
        });
        let root = Node::root().with_child(
            Node::container("callout")
                .with_child(Node::paragraph().with_child(Node::text("note"))),
        );
        let exporter = MarkdownExporter::with_maps(vec![map]);
        assert_eq!(exporter.export(&root).unwrap(), "> note");
    }
}
