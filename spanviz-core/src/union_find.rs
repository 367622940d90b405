//! Disjoint-Set (Union-Find)
//!
//! Supports Kruskal's cycle detection and the component snapshots shown in
//! the visualizer's union-find panel.
//!
//! Two choices here are deliberate compatibility constraints rather than
//! oversights:
//!
//! - `union(a, b)` always attaches `find(a)` under `find(b)`, with no
//!   union-by-rank balancing. Path compression in `find` keeps the trees
//!   shallow enough at visualization scale, and the fixed attachment rule
//!   keeps component snapshots reproducible step for step.
//! - `components` groups ids by root in first-encounter order over the
//!   original id sequence, so the panel's grouping is stable across calls.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::graph::NodeId;

/// A partition of node ids into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent links, keyed in first-encounter order. A root points at
    /// itself.
    parent: IndexMap<NodeId, NodeId>,
}

impl DisjointSet {
    /// Initialize every id as its own singleton set.
    ///
    /// Fails if the ids are not unique.
    pub fn new(ids: impl IntoIterator<Item = NodeId>) -> Result<Self> {
        let mut parent = IndexMap::new();
        for id in ids {
            if parent.insert(id, id).is_some() {
                return Err(Error::DuplicateNode { node: id });
            }
        }
        Ok(Self { parent })
    }

    /// Number of tracked ids.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no ids are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of `id`'s set, compressing the path walked.
    ///
    /// An id that was never registered is its own representative.
    pub fn find(&mut self, id: NodeId) -> NodeId {
        let mut root = id;
        while let Some(&next) = self.parent.get(&root) {
            if next == root {
                break;
            }
            root = next;
        }
        // Point every node on the walked path directly at the root.
        let mut current = id;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`: `parent[find(a)] = find(b)`.
    pub fn union(&mut self, a: NodeId, b: NodeId) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        self.parent.insert(root_a, root_b);
    }

    /// Whether `a` and `b` are currently in the same set.
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Group all known ids by their representative.
    ///
    /// Groups appear in the order their first member was registered, and
    /// members keep registration order within a group. Path compression may
    /// run internally but the grouping itself is a pure read.
    pub fn components(&mut self) -> Vec<Vec<NodeId>> {
        let ids: Vec<NodeId> = self.parent.keys().copied().collect();
        let mut groups: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
        for id in ids {
            let root = self.find(id);
            groups.entry(root).or_default().push(id);
        }
        groups.into_values().collect()
    }
}
