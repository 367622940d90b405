//! Graph Edges
//!
//! Edges are undirected but stored canonically: the id is the unordered
//! endpoint pair written `"min-max"`, and `source < target` always holds.
//! At most one edge may exist between any pair of nodes, and self-loops are
//! rejected at construction.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::graph::node::NodeId;

/// Canonical identifier for an undirected edge.
///
/// Construction normalizes the endpoint order, so two ids built from the
/// same unordered pair always compare equal. Serialized as the string
/// `"min-max"`, the form the front end uses as a stable element key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    source: NodeId,
    target: NodeId,
}

impl EdgeId {
    /// Build the canonical id for the unordered pair `{a, b}`.
    pub fn new(a: NodeId, b: NodeId) -> Result<Self> {
        if a == b {
            return Err(Error::SelfLoop { node: a });
        }
        let (source, target) = if a.raw() < b.raw() { (a, b) } else { (b, a) };
        Ok(Self { source, target })
    }

    /// The smaller endpoint.
    pub fn source(self) -> NodeId {
        self.source
    }

    /// The larger endpoint.
    pub fn target(self) -> NodeId {
        self.target
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for EdgeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedEdgeId { raw: s.to_string() };
        let (a, b) = s.split_once('-').ok_or_else(malformed)?;
        let a: u32 = a.trim().parse().map_err(|_| malformed())?;
        let b: u32 = b.trim().parse().map_err(|_| malformed())?;
        Self::new(NodeId::new(a), NodeId::new(b))
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Classification of an edge at a point in an algorithm run.
///
/// Reset to `Unvisited` whenever the algorithm or graph is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    /// Not yet touched by the algorithm.
    #[default]
    Unvisited,
    /// Under consideration (in the priority queue / being examined).
    Candidate,
    /// Selected into the spanning tree.
    Included,
    /// Rejected (stale queue entry or cycle-forming edge).
    Excluded,
}

/// A weighted undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: u32,
    status: EdgeStatus,
}

impl Edge {
    /// Create an edge between `a` and `b` with a positive weight.
    ///
    /// Endpoints are stored canonically (`source < target`) and the status
    /// starts as `Unvisited`.
    pub fn new(a: NodeId, b: NodeId, weight: u32) -> Result<Self> {
        if weight == 0 {
            return Err(Error::InvalidWeight);
        }
        let id = EdgeId::new(a, b)?;
        Ok(Self {
            id,
            source: id.source(),
            target: id.target(),
            weight,
            status: EdgeStatus::Unvisited,
        })
    }

    /// Get the canonical id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The smaller endpoint.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The larger endpoint.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The positive integer weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Current classification.
    pub fn status(&self) -> EdgeStatus {
        self.status
    }

    /// Set the classification.
    pub fn set_status(&mut self, status: EdgeStatus) {
        self.status = status;
    }

    /// Whether `node` is one of this edge's endpoints.
    pub fn is_incident(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}
