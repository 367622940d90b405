//! Algorithm Step Generators
//!
//! This module is the core of the crate: given a read-only graph snapshot,
//! each generator eagerly produces the complete ordered sequence of
//! [`Step`] records describing a textbook run of its algorithm, plus the
//! [`MstResult`] selected along the way.
//!
//! Generation is a pure synchronous computation. The input graph is never
//! mutated; edge statuses on input are ignored and every run starts from
//! the logical all-unvisited baseline. Later steps carry full-replacement
//! snapshots computed with knowledge of earlier decisions, which is why the
//! sequence is built whole rather than streamed.

mod kruskal;
mod prim;
pub mod step;

pub use step::{EdgeUpdate, QueueEntry, SortedEdge, Step};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, EdgeStatus, Graph, NodeId};

/// Which algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prims,
    Kruskals,
}

impl Algorithm {
    /// Human-facing name, as shown in explanations.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Prims => "Prim's",
            Algorithm::Kruskals => "Kruskal's",
        }
    }
}

/// The spanning tree (or forest, for disconnected input) a run selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult {
    /// Edges selected into the tree, in selection order.
    pub edges: Vec<Edge>,
    /// Sum of the selected edges' weights.
    pub total_weight: u64,
}

impl MstResult {
    /// Build a result from the selected edges, summing their weights.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| u64::from(e.weight())).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// Whether the tree contains the edge.
    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|e| e.id() == id)
    }
}

/// A complete generator run: the step sequence plus the selected tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub steps: Vec<Step>,
    pub mst: MstResult,
}

impl Generation {
    /// Number of steps in the sequence.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// The pseudocode lines shown in the Prim's reference panel. Steps label
/// themselves with the line they correspond to.
pub const PRIM_PSEUDOCODE: [&str; 8] = [
    "1. Start with an arbitrary node (we'll use the first node)",
    "2. Add the node to the visited set",
    "3. Find all edges connecting visited nodes to unvisited nodes",
    "4. Add these edges to the priority queue (min heap)",
    "5. Extract the minimum weight edge from the priority queue",
    "6. If the edge connects to an unvisited node, add it to the MST",
    "7. Add the new node to the visited set",
    "8. Repeat until all nodes are visited or no more edges exist",
];

/// The pseudocode lines shown in the Kruskal's reference panel.
pub const KRUSKAL_PSEUDOCODE: [&str; 7] = [
    "1. Sort all edges in non-decreasing order of weight",
    "2. Initialize Union-Find data structure for all nodes",
    "3. For each edge in sorted order:",
    "   a. Check if adding the edge creates a cycle using Union-Find",
    "   b. If no cycle is created, add the edge to the MST",
    "   c. Union the sets of the two endpoints",
    "4. Continue until we have V-1 edges (a complete MST)",
];

/// Run the selected algorithm over a graph snapshot.
///
/// Fails fast on an empty graph or a graph that violates the integrity
/// invariants; no partial step sequence is returned on error. A
/// disconnected graph is not an error: the result simply carries fewer
/// than `node_count - 1` edges.
pub fn generate(graph: &Graph, algorithm: Algorithm) -> Result<Generation> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    graph.validate()?;
    debug!(
        algorithm = algorithm.display_name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generating step sequence"
    );
    let generation = match algorithm {
        Algorithm::Prims => prim::generate(graph)?,
        Algorithm::Kruskals => kruskal::generate(graph)?,
    };
    debug!(
        steps = generation.step_count(),
        mst_edges = generation.mst.edges.len(),
        total_weight = generation.mst.total_weight,
        "step sequence complete"
    );
    Ok(generation)
}

/// Working copy of the graph's edges in encounter order, statuses forced
/// back to the unvisited baseline.
fn baseline_edges(graph: &Graph) -> Vec<Edge> {
    graph
        .edges()
        .map(|edge| {
            let mut edge = edge.clone();
            edge.set_status(EdgeStatus::Unvisited);
            edge
        })
        .collect()
}

/// Display label for a node, falling back to the raw id for ids the graph
/// no longer contains.
fn node_label(graph: &Graph, id: NodeId) -> String {
    match graph.node(id) {
        Some(node) => node.label().to_string(),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    fn nid(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    /// The concrete scenario from the design discussion: 4 nodes, MST
    /// weight 6 via A-B, B-C, C-D.
    fn diamond() -> Graph {
        let mut graph = Graph::new();
        for i in 0..4 {
            graph.add_node(f64::from(i), 0.0);
        }
        graph.add_edge(nid(0), nid(1), 1).unwrap();
        graph.add_edge(nid(1), nid(2), 2).unwrap();
        graph.add_edge(nid(2), nid(3), 3).unwrap();
        graph.add_edge(nid(0), nid(3), 10).unwrap();
        graph.add_edge(nid(0), nid(2), 5).unwrap();
        graph
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = Graph::new();
        assert_eq!(
            generate(&graph, Algorithm::Prims).unwrap_err(),
            Error::EmptyGraph
        );
        assert_eq!(
            generate(&graph, Algorithm::Kruskals).unwrap_err(),
            Error::EmptyGraph
        );
    }

    #[test]
    fn both_algorithms_agree_on_total_weight() {
        let graph = diamond();
        let prims = generate(&graph, Algorithm::Prims).unwrap();
        let kruskals = generate(&graph, Algorithm::Kruskals).unwrap();
        assert_eq!(prims.mst.total_weight, 6);
        assert_eq!(kruskals.mst.total_weight, 6);
        assert_eq!(prims.mst.edges.len(), 3);
        assert_eq!(kruskals.mst.edges.len(), 3);
    }

    #[test]
    fn generation_does_not_mutate_the_input() {
        let graph = diamond();
        let before = graph.clone();
        generate(&graph, Algorithm::Prims).unwrap();
        generate(&graph, Algorithm::Kruskals).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn input_statuses_are_ignored() {
        let mut dirty = diamond();
        let id = dirty.edges().next().unwrap().id();
        dirty.set_status(id, EdgeStatus::Excluded);

        let clean = diamond();
        let from_dirty = generate(&dirty, Algorithm::Kruskals).unwrap();
        let from_clean = generate(&clean, Algorithm::Kruskals).unwrap();
        assert_eq!(from_dirty, from_clean);
    }

    #[test]
    fn mst_result_membership() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Kruskals).unwrap();
        let ab = EdgeId::new(nid(0), nid(1)).unwrap();
        let ad = EdgeId::new(nid(0), nid(3)).unwrap();
        assert!(generation.mst.contains(ab));
        assert!(!generation.mst.contains(ad));
    }
}
