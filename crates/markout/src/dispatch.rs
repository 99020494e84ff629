//! Tree traversal and conversion dispatch.

use crate::node::Node;
use crate::state::State;

/// Convert one node: resolve its conversion through the registry and apply
/// it. A node no map claims is unrepresentable in Markdown and produces no
/// output.
pub fn dispatch(node: &Node, state: &mut State) {
    let conversion = state.registry().resolve(node);
    if let Some(conversion) = conversion {
        conversion.apply(node, state);
    }
}

/// Convert a self-contained inline region.
///
/// Flushes the inline buffer on entry and exit so the reconciler sees
/// exactly this region's runs: stale runs from an enclosing region are
/// written out first, and nothing buffered here leaks past the region.
pub fn dispatch_inline_region(parent: &Node, state: &mut State) {
    state.flush_inline();
    if parent.is_container() {
        for child in parent.children() {
            dispatch(child, state);
        }
    } else {
        // A leaf was passed where a container was expected. That is a
        // contract violation by the caller; rather than dropping the
        // content, treat the node itself as the region's sole inline
        // content.
        dispatch(parent, state);
    }
    state.flush_inline();
}

/// Convert each child in order with no inline flushing. For block
/// containers whose children are themselves blocks.
pub fn dispatch_children(parent: &Node, state: &mut State) {
    for child in parent.children() {
        dispatch(child, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::{builtin_conversions, Registry};
    use crate::node::Node;
    use crate::options::ExportOptions;

    fn registry() -> Registry {
        Registry::new(vec![builtin_conversions()])
    }

    #[test]
    fn test_unknown_node_is_silent() {
        let registry = registry();
        let mut state = State::new(&registry, ExportOptions::default());
        dispatch(&Node::leaf("mystery"), &mut state);
        assert_eq!(state.into_output(), "");
    }

    #[test]
    fn test_inline_region_over_container() {
        let registry = registry();
        let mut state = State::new(&registry, ExportOptions::default());
        let para = Node::paragraph()
            .with_child(Node::text("a"))
            .with_child(Node::text("b"));
        dispatch_inline_region(&para, &mut state);
        assert_eq!(state.into_output(), "ab");
    }

    #[test]
    fn test_inline_region_leaf_fallback() {
        // A non-container parent falls back to converting the node itself.
        let registry = registry();
        let mut state = State::new(&registry, ExportOptions::default());
        dispatch_inline_region(&Node::text("solo"), &mut state);
        assert_eq!(state.into_output(), "solo");
    }

    #[test]
    fn test_inline_region_flushes_stale_runs_first() {
        use crate::format::InlineRun;
        let registry = registry();
        let mut state = State::new(&registry, ExportOptions::default());
        state.push_inline_run(InlineRun::plain("stale"));
        let para = Node::paragraph().with_child(Node::text("fresh"));
        dispatch_inline_region(&para, &mut state);
        assert!(state.inline_runs().is_empty());
        assert_eq!(state.into_output(), "stalefresh");
    }
}
