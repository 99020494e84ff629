//! Document tree interchange structure.
//!
//! The serializer does not depend on any particular editor or document
//! model. Instead it consumes this `Node` structure, which any host tree
//! can be converted into: a type name, optional ordered children, optional
//! text content, active text formats, and a flat attribute list for
//! node-specific data (link URL, heading level, custom extension data).
//!
//! Nodes are read-only from the serializer's perspective; the mutating
//! methods exist for callers assembling a tree.

use crate::format::{Format, FormatSpec};

/// Built-in node type names.
pub const ROOT: &str = "root";
pub const PARAGRAPH: &str = "paragraph";
pub const HEADING: &str = "heading";
pub const TEXT: &str = "text";
pub const LINE_BREAK: &str = "linebreak";
pub const TAB: &str = "tab";
pub const LINK: &str = "link";
pub const AUTOLINK: &str = "autolink";

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_type: String,
    /// `None` for leaf kinds (text, linebreak, tab), `Some` for containers.
    children: Option<Vec<Node>>,
    text: Option<String>,
    formats: Vec<Format>,
    /// Flat attribute list: (name, value) pairs, linear lookup.
    attrs: Vec<(String, String)>,
}

impl Node {
    /// Create a container node of an arbitrary type.
    pub fn container(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            children: Some(Vec::new()),
            text: None,
            formats: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Create a leaf node of an arbitrary type.
    pub fn leaf(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            children: None,
            text: None,
            formats: Vec::new(),
            attrs: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::container(ROOT)
    }

    pub fn paragraph() -> Self {
        Self::container(PARAGRAPH)
    }

    pub fn heading(level: u8) -> Self {
        Self::container(HEADING).with_attr("level", &level.to_string())
    }

    pub fn text(content: &str) -> Self {
        let mut node = Self::leaf(TEXT);
        node.text = Some(content.to_string());
        node
    }

    pub fn line_break() -> Self {
        Self::leaf(LINE_BREAK)
    }

    pub fn tab() -> Self {
        Self::leaf(TAB)
    }

    pub fn link(url: &str) -> Self {
        Self::container(LINK).with_attr("url", url)
    }

    /// An auto-detected link. Call [`Node::unlinked`] to keep the detected
    /// text without emitting link syntax.
    pub fn autolink(url: &str) -> Self {
        Self::container(AUTOLINK).with_attr("url", url)
    }

    /// Builder: add an active format.
    pub fn with_format(mut self, format: Format) -> Self {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Builder: set text content (for custom text-bearing leaf kinds).
    pub fn with_text(mut self, content: &str) -> Self {
        self.text = Some(content.to_string());
        self
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: set the title attribute (links, images).
    pub fn with_title(self, title: &str) -> Self {
        self.with_attr("title", title)
    }

    /// Builder: mark an autolink as unlinked (render text, no link syntax).
    pub fn unlinked(self) -> Self {
        self.with_attr("unlinked", "true")
    }

    /// Append a child node. Turns a leaf into a container if needed.
    pub fn add_child(&mut self, child: Node) {
        match &mut self.children {
            Some(children) => children.push(child),
            None => self.children = Some(vec![child]),
        }
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for (n, v) in &mut self.attrs {
            if n == name {
                *v = value.to_string();
                return;
            }
        }
        self.attrs.push((name.to_string(), value.to_string()));
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Ordered children; empty iterator for leaves.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Whether this node is a container (even an empty one).
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Text content; empty string for non-text nodes.
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn has_format(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    /// Active format tag pairs in application order.
    pub fn active_specs(&self) -> Vec<FormatSpec> {
        Format::PRECEDENCE
            .iter()
            .filter(|f| self.has_format(**f))
            .map(|f| f.spec())
            .collect()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn url(&self) -> Option<&str> {
        self.attr("url")
    }

    pub fn title(&self) -> Option<&str> {
        self.attr("title")
    }

    /// Heading level, clamped to 1..=6.
    pub fn level(&self) -> u8 {
        self.attr("level")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1)
            .clamp(1, 6)
    }

    pub fn is_unlinked(&self) -> bool {
        self.attr("unlinked") == Some("true")
    }

    /// True when the node carries no text and no children at all. Leaf
    /// kinds without text content (images, rules) count as content, so a
    /// paragraph holding only an image is not empty.
    pub fn is_empty(&self) -> bool {
        self.text_content().is_empty() && !self.has_children()
    }
}
