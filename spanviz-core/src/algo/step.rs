//! Step Records
//!
//! The atomic unit of algorithm progress. Steps are pure data: the
//! generators produce them eagerly and never look at them again, and the
//! playback controller applies them in order from the all-unvisited
//! baseline. Snapshot fields are full replacements, not diffs.
//!
//! Serialization is camelCase with absent snapshots omitted, the exact
//! shape the visualizer front end consumes.

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, EdgeId, EdgeStatus, NodeId};

/// One edge status change to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeUpdate {
    pub id: EdgeId,
    pub status: EdgeStatus,
}

/// An entry in Prim's priority queue, exposed for the min-heap panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub edge: Edge,
    pub weight: u32,
    pub source: NodeId,
    pub target: NodeId,
}

impl From<&Edge> for QueueEntry {
    fn from(edge: &Edge) -> Self {
        Self {
            edge: edge.clone(),
            weight: edge.weight(),
            source: edge.source(),
            target: edge.target(),
        }
    }
}

/// An entry in Kruskal's sorted edge list, with the status the panel shows
/// for it at this point of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
    pub status: EdgeStatus,
}

impl SortedEdge {
    /// Snapshot `edge` with an explicit panel status.
    pub fn of(edge: &Edge, status: EdgeStatus) -> Self {
        Self {
            id: edge.id(),
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
            status,
        }
    }
}

/// One replayable unit of algorithm progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Edge status changes, applied in order.
    pub edge_updates: Vec<EdgeUpdate>,

    /// Full replacement of Prim's visited set, in visit order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_nodes: Option<Vec<NodeId>>,

    /// Full replacement of Prim's priority queue, sorted ascending by
    /// weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_heap: Option<Vec<QueueEntry>>,

    /// Full replacement of Kruskal's sorted edge list with per-entry panel
    /// statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted_edges: Option<Vec<SortedEdge>>,

    /// Full replacement of the disjoint-set components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_find: Option<Vec<Vec<NodeId>>>,

    /// Human-readable sentence describing what happened.
    pub explanation: String,

    /// The textbook pseudocode line this step corresponds to.
    pub algorithm_step: String,
}
