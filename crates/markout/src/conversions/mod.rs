//! Conversion maps and their merged registry.
//!
//! A [`ConversionMap`] maps node-type names to factories. A factory
//! inspects the node and either produces a [`Conversion`] or declines with
//! `None` (a map keyed on a broad type can still refuse individual nodes).
//! Multiple maps are merged into a [`Registry`] at exporter construction;
//! per node, the conversion with the strictly highest priority wins and
//! ties keep the first-registered map's conversion.

mod builtin;

pub use builtin::builtin_conversions;

use std::sync::Arc;

use indexmap::IndexMap;

use crate::node::Node;
use crate::state::State;

/// The body of a conversion: consumes the node, drives the state.
pub type ApplyFn = dyn Fn(&Node, &mut State) + Send + Sync;

type Factory = Box<dyn Fn(&Node) -> Option<Conversion> + Send + Sync>;

/// A resolved conversion for one node.
#[derive(Clone)]
pub struct Conversion {
    apply: Arc<ApplyFn>,
    priority: u8,
}

impl Conversion {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&Node, &mut State) + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
            priority: 0,
        }
    }

    pub fn with_priority<F>(apply: F, priority: u8) -> Self
    where
        F: Fn(&Node, &mut State) + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
            priority,
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn apply(&self, node: &Node, state: &mut State) {
        (self.apply)(node, state);
    }
}

/// An insertion-ordered map from node-type name to conversion factory.
#[derive(Default)]
pub struct ConversionMap {
    entries: IndexMap<String, Factory>,
}

impl ConversionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a node type.
    pub fn insert<F>(&mut self, node_type: &str, factory: F)
    where
        F: Fn(&Node) -> Option<Conversion> + Send + Sync + 'static,
    {
        self.entries.insert(node_type.to_string(), Box::new(factory));
    }

    /// Register an unconditional priority-0 conversion for a node type.
    pub fn on<F>(&mut self, node_type: &str, apply: F)
    where
        F: Fn(&Node, &mut State) + Send + Sync + 'static,
    {
        let conversion = Conversion::new(apply);
        self.insert(node_type, move |_| Some(conversion.clone()));
    }

    pub fn get(&self, node_type: &str) -> Option<&Factory> {
        self.entries.get(node_type)
    }
}

/// The merged, registration-ordered set of conversion maps.
pub struct Registry {
    maps: Vec<ConversionMap>,
}

impl Registry {
    pub fn new(maps: Vec<ConversionMap>) -> Self {
        Self { maps }
    }

    pub fn push(&mut self, map: ConversionMap) {
        self.maps.push(map);
    }

    /// Resolve the conversion for a node across all maps.
    ///
    /// Factories may decline; among the rest, the strictly highest
    /// priority wins. The `>` comparison keeps the first-registered map's
    /// conversion on ties.
    pub fn resolve(&self, node: &Node) -> Option<Conversion> {
        let mut best: Option<Conversion> = None;
        for map in &self.maps {
            if let Some(factory) = map.get(node.node_type()) {
                if let Some(conversion) = factory(node) {
                    let wins = best
                        .as_ref()
                        .map_or(true, |b| conversion.priority() > b.priority());
                    if wins {
                        best = Some(conversion);
                    }
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ExportOptions;

    fn marker_map(node_type: &str, marker: &'static str, priority: u8) -> ConversionMap {
        let mut map = ConversionMap::new();
        map.insert(node_type, move |_| {
            Some(Conversion::with_priority(
                move |_, state: &mut State| state.write(marker),
                priority,
            ))
        });
        map
    }

    fn apply_resolved(registry: &Registry, node: &Node) -> String {
        let mut state = State::new(registry, ExportOptions::default());
        if let Some(conversion) = registry.resolve(node) {
            conversion.apply(node, &mut state);
        }
        state.into_output()
    }

    #[test]
    fn test_higher_priority_wins_regardless_of_order() {
        let registry = Registry::new(vec![
            marker_map("x", "low", 0),
            marker_map("x", "high", 2),
        ]);
        let node = Node::leaf("x");
        assert_eq!(apply_resolved(&registry, &node), "high");
    }

    #[test]
    fn test_equal_priority_keeps_first_registered() {
        let registry = Registry::new(vec![
            marker_map("x", "first", 1),
            marker_map("x", "second", 1),
        ]);
        let node = Node::leaf("x");
        assert_eq!(apply_resolved(&registry, &node), "first");
    }

    #[test]
    fn test_declining_factory_falls_through() {
        let mut declining = ConversionMap::new();
        declining.insert("x", |node| {
            if node.has_children() {
                Some(Conversion::new(|_, state: &mut State| state.write("container")))
            } else {
                None
            }
        });
        let registry = Registry::new(vec![declining, marker_map("x", "leaf", 0)]);
        assert_eq!(apply_resolved(&registry, &Node::leaf("x")), "leaf");
        let container = Node::container("x").with_child(Node::text("c"));
        assert_eq!(apply_resolved(&registry, &container), "container");
    }

    #[test]
    fn test_unknown_type_resolves_nothing() {
        let registry = Registry::new(vec![marker_map("x", "x", 0)]);
        assert!(registry.resolve(&Node::leaf("y")).is_none());
    }
}
