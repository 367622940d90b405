//! Prim's Step Generator
//!
//! Grows the tree outward from the start node. The priority queue is kept
//! as a weight-sorted list and re-sorted before every extraction; sorting
//! is stable, so equal weights keep their encounter order. Entries whose
//! far endpoint has been visited in the meantime are stale and are skipped
//! with an explicit exclusion step, which is what the visualization wants
//! to show.
//!
//! The start node is id 0, or the first node in sequence when ids are
//! sparse. A disconnected graph drains the queue early and the run stops
//! with a partial tree; that is a normal terminal condition.

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{EdgeStatus, Graph, NodeId};

use super::step::{EdgeUpdate, QueueEntry, Step};
use super::{baseline_edges, node_label, Generation, MstResult, PRIM_PSEUDOCODE};

pub(super) fn generate(graph: &Graph) -> Result<Generation> {
    let start = graph
        .node(NodeId::new(0))
        .or_else(|| graph.nodes().next())
        .ok_or(Error::EmptyGraph)?;
    let start_id = start.id();
    let start_label = start.label().to_string();

    let edges = baseline_edges(graph);
    let mut steps = Vec::new();
    let mut visited: Vec<NodeId> = vec![start_id];
    let mut mst_edges = Vec::new();

    steps.push(Step {
        visited_nodes: Some(visited.clone()),
        min_heap: Some(Vec::new()),
        explanation: format!(
            "Starting Prim's algorithm from node {start_label}. Adding it to the visited set."
        ),
        algorithm_step: PRIM_PSEUDOCODE[1].to_string(),
        ..Step::default()
    });

    // Seed the queue with everything incident to the start node. The step
    // is emitted even when the start node is isolated.
    let initial: SmallVec<[_; 8]> = edges.iter().filter(|e| e.is_incident(start_id)).collect();
    let mut queue: Vec<QueueEntry> = initial.iter().map(|e| QueueEntry::from(*e)).collect();
    queue.sort_by_key(|entry| entry.weight);

    steps.push(Step {
        edge_updates: initial
            .iter()
            .map(|e| EdgeUpdate {
                id: e.id(),
                status: EdgeStatus::Candidate,
            })
            .collect(),
        visited_nodes: Some(visited.clone()),
        min_heap: Some(queue.clone()),
        explanation: format!(
            "Adding all edges connected to starting node {start_label} to the priority queue."
        ),
        algorithm_step: PRIM_PSEUDOCODE[3].to_string(),
        ..Step::default()
    });

    while visited.len() < graph.node_count() && !queue.is_empty() {
        queue.sort_by_key(|entry| entry.weight);
        let entry = queue.remove(0);
        let min_edge = entry.edge;
        let node_to_add = if visited.contains(&min_edge.source()) {
            min_edge.target()
        } else {
            min_edge.source()
        };

        if visited.contains(&node_to_add) {
            // Stale entry: both endpoints were reached through cheaper
            // edges after this one was queued.
            trace!(edge = %min_edge.id(), "skipping stale queue entry");
            steps.push(Step {
                edge_updates: vec![EdgeUpdate {
                    id: min_edge.id(),
                    status: EdgeStatus::Excluded,
                }],
                visited_nodes: Some(visited.clone()),
                min_heap: Some(queue.clone()),
                explanation: format!(
                    "Skipping edge with weight {} (connects to already visited node).",
                    min_edge.weight()
                ),
                algorithm_step: PRIM_PSEUDOCODE[5].to_string(),
                ..Step::default()
            });
            continue;
        }

        mst_edges.push(min_edge.clone());
        visited.push(node_to_add);
        trace!(edge = %min_edge.id(), node = %node_to_add, "edge added to tree");

        steps.push(Step {
            edge_updates: vec![EdgeUpdate {
                id: min_edge.id(),
                status: EdgeStatus::Included,
            }],
            visited_nodes: Some(visited.clone()),
            min_heap: Some(queue.clone()),
            explanation: format!(
                "Extracting min edge with weight {} -> node {}. Adding to MST.",
                min_edge.weight(),
                node_label(graph, node_to_add)
            ),
            algorithm_step: PRIM_PSEUDOCODE[5].to_string(),
            ..Step::default()
        });

        // Frontier edges: exactly one endpoint visited, not the edge just
        // processed, not already in the tree.
        let candidates: SmallVec<[_; 8]> = edges
            .iter()
            .filter(|e| {
                e.id() != min_edge.id()
                    && !mst_edges.iter().any(|m| m.id() == e.id())
                    && (visited.contains(&e.source()) ^ visited.contains(&e.target()))
            })
            .collect();
        for edge in &candidates {
            if !queue.iter().any(|q| q.edge.id() == edge.id()) {
                queue.push(QueueEntry::from(*edge));
            }
        }
        queue.sort_by_key(|entry| entry.weight);

        steps.push(Step {
            edge_updates: candidates
                .iter()
                .map(|e| EdgeUpdate {
                    id: e.id(),
                    status: EdgeStatus::Candidate,
                })
                .collect(),
            visited_nodes: Some(visited.clone()),
            min_heap: Some(queue.clone()),
            explanation: format!(
                "Adding {} new candidate edges to the queue. Now {} total.",
                candidates.len(),
                queue.len()
            ),
            algorithm_step: PRIM_PSEUDOCODE[3].to_string(),
            ..Step::default()
        });
    }

    Ok(Generation {
        steps,
        mst: MstResult::from_edges(mst_edges),
    })
}
