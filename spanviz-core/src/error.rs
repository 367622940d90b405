//! Error Types
//!
//! All fallible operations in this crate surface one error enum. Generation
//! errors are synchronous and indicate caller-side data integrity bugs; no
//! partial step sequence is ever returned alongside an error.

use crate::graph::{EdgeId, NodeId};

/// Errors produced by graph construction, validation, and step generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Generation was requested on a graph with zero nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// An edge references a node id that does not exist in the graph.
    #[error("edge {edge} references missing node {node}")]
    InvalidEdgeEndpoint { edge: EdgeId, node: NodeId },

    /// Two edges share the same canonical id.
    #[error("duplicate edge {edge}")]
    DuplicateEdge { edge: EdgeId },

    /// An edge's stored id does not match its endpoints.
    #[error("edge id {edge} does not match its endpoints")]
    MismatchedEdgeId { edge: EdgeId },

    /// An edge id string could not be parsed as `"min-max"`.
    #[error("malformed edge id {raw:?}")]
    MalformedEdgeId { raw: String },

    /// Both endpoints of an edge are the same node.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop { node: NodeId },

    /// A node id was referenced that the graph does not contain.
    #[error("unknown node {node}")]
    UnknownNode { node: NodeId },

    /// An edge id was referenced that the graph does not contain.
    #[error("unknown edge {edge}")]
    UnknownEdge { edge: EdgeId },

    /// Two nodes share the same id.
    #[error("duplicate node id {node}")]
    DuplicateNode { node: NodeId },

    /// Edge weights must be positive integers.
    #[error("edge weight must be a positive integer")]
    InvalidWeight,

    /// Random graph generation was asked for an impossible configuration.
    #[error("invalid generator parameters: {0}")]
    InvalidParams(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
