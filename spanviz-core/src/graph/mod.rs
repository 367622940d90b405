//! Graph Model
//!
//! The weighted undirected graph the step generators consume. Nodes and
//! edges live in insertion-ordered maps; that order is the "original
//! encounter order" behind every stable tie-break and first-encounter
//! grouping the generators promise.
//!
//! Invariants maintained by the construction API and re-checked by
//! [`Graph::validate`] on deserialized input:
//!
//! - every edge's endpoints reference existing nodes
//! - edge ids are canonical (`source < target`) and unique
//! - no self-loops, no multi-edges, all weights positive

mod edge;
mod node;

pub use edge::{Edge, EdgeId, EdgeStatus};
pub use node::{label_for, Node, NodeId};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::union_find::DisjointSet;

/// A weighted undirected simple graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "GraphData", try_from = "GraphData")]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
}

/// Serialized shape of a graph: plain node and edge arrays, matching the
/// JSON the front end holds in its component state.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes.into_values().collect(),
            edges: graph.edges.into_values().collect(),
        }
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = Error;

    fn try_from(data: GraphData) -> Result<Self> {
        Graph::from_parts(data.nodes, data.edges)
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from already-built nodes and edges, validating all
    /// integrity invariants.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut node_map = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id();
            if node_map.insert(id, node).is_some() {
                return Err(Error::DuplicateNode { node: id });
            }
        }
        let mut edge_map = IndexMap::with_capacity(edges.len());
        for edge in edges {
            let id = edge.id();
            if edge_map.insert(id, edge).is_some() {
                return Err(Error::DuplicateEdge { edge: id });
            }
        }
        let graph = Self {
            nodes: node_map,
            edges: edge_map,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Add a node at the given layout position.
    ///
    /// The id is one past the largest existing id, so deleting a node never
    /// lets a later insertion collide with a survivor.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let raw = self
            .nodes
            .keys()
            .map(|id| id.raw() + 1)
            .max()
            .unwrap_or(0);
        let id = NodeId::new(raw);
        self.nodes.insert(id, Node::new(id, x, y));
        id
    }

    /// Add an edge between two existing nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) -> Result<EdgeId> {
        for node in [a, b] {
            if !self.nodes.contains_key(&node) {
                return Err(Error::UnknownNode { node });
            }
        }
        let edge = Edge::new(a, b, weight)?;
        let id = edge.id();
        if self.edges.contains_key(&id) {
            return Err(Error::DuplicateEdge { edge: id });
        }
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Remove a node and every edge incident to it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        let node = self
            .nodes
            .shift_remove(&id)
            .ok_or(Error::UnknownNode { node: id })?;
        self.edges.retain(|_, edge| !edge.is_incident(id));
        Ok(node)
    }

    /// Remove a single edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        self.edges
            .shift_remove(&id)
            .ok_or(Error::UnknownEdge { edge: id })
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Reset every edge's status to `Unvisited`.
    pub fn reset_statuses(&mut self) {
        for edge in self.edges.values_mut() {
            edge.set_status(EdgeStatus::Unvisited);
        }
    }

    /// Set one edge's status. Returns `false` if the edge is unknown.
    pub fn set_status(&mut self, id: EdgeId, status: EdgeStatus) -> bool {
        match self.edges.get_mut(&id) {
            Some(edge) => {
                edge.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up an edge.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Whether the graph contains the node.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterate edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.is_incident(node))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check the integrity invariants on the current contents.
    ///
    /// The construction API cannot violate them; this exists so deserialized
    /// or hand-assembled graphs fail fast instead of producing a garbage
    /// step sequence.
    pub fn validate(&self) -> Result<()> {
        for (id, edge) in &self.edges {
            let canonical = EdgeId::new(edge.source(), edge.target())?;
            if *id != canonical
                || edge.id() != canonical
                || edge.source() != canonical.source()
                || edge.target() != canonical.target()
            {
                return Err(Error::MismatchedEdgeId { edge: edge.id() });
            }
            for node in [edge.source(), edge.target()] {
                if !self.nodes.contains_key(&node) {
                    return Err(Error::InvalidEdgeEndpoint { edge: *id, node });
                }
            }
            if edge.weight() == 0 {
                return Err(Error::InvalidWeight);
            }
        }
        Ok(())
    }

    /// Connected components of the current graph, grouped in
    /// first-encounter order over the node sequence.
    pub fn components(&self) -> Result<Vec<Vec<NodeId>>> {
        let mut sets = DisjointSet::new(self.node_ids())?;
        for edge in self.edges.values() {
            sets.union(edge.source(), edge.target());
        }
        Ok(sets.components())
    }
}
