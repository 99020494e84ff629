//! Block quote conversion.

use markout::{dispatch_children, ConversionMap, Node};

pub const QUOTE: &str = "quote";

/// A block quote container; children are blocks.
pub fn quote() -> Node {
    Node::container(QUOTE)
}

pub fn quote_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();
    map.on(QUOTE, |node, state| {
        state.wrap_block("> ", None, node, |st| dispatch_children(node, st));
    });
    map
}
