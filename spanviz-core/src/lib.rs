//! Spanviz Core
//!
//! This crate is the computation engine behind the Spanviz MST teaching
//! visualizer. It implements:
//!
//! - A weighted undirected graph model with canonical edge ids
//! - A disjoint-set structure matching the visualizer's union-find panel
//! - Step generators for Prim's and Kruskal's algorithms
//! - A cursor-driven playback controller and timed auto-play
//! - Session caching and connectivity-guaranteeing random graphs
//!
//! The crate is a pure computation library: given a graph snapshot and an
//! algorithm choice it eagerly produces the complete ordered sequence of
//! [`Step`] records (each carrying edge status changes, full panel
//! snapshots, and an explanation) plus the resulting [`MstResult`]. The
//! host front end replays that sequence to animate the run; it never
//! computes algorithm logic itself.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: nodes, edges, statuses, and the graph container
//! - `union_find`: disjoint-set supporting Kruskal's cycle detection
//! - `algo`: the step generators and the step/result data types
//! - `playback`: step replay, scrubbing, and timed auto-play
//! - `session`: graph + algorithm selection with a cached run
//! - `random`: connected random practice graphs
//!
//! # Example
//!
//! ```rust
//! use spanviz_core::{generate, Algorithm, Graph, Playback};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(0.0, 0.0);
//! let b = graph.add_node(100.0, 0.0);
//! let c = graph.add_node(50.0, 80.0);
//! graph.add_edge(a, b, 4).unwrap();
//! graph.add_edge(b, c, 2).unwrap();
//! graph.add_edge(a, c, 7).unwrap();
//!
//! let generation = generate(&graph, Algorithm::Kruskals).unwrap();
//! assert_eq!(generation.mst.total_weight, 6);
//!
//! // Replay the run one step at a time.
//! let mut playback = Playback::from_generation(graph, &generation);
//! while playback.advance() {
//!     println!("{}", playback.explanation());
//! }
//! ```

pub mod algo;
pub mod error;
pub mod graph;
pub mod playback;
pub mod random;
pub mod session;
pub mod union_find;

pub use algo::{
    generate, Algorithm, EdgeUpdate, Generation, MstResult, QueueEntry, SortedEdge, Step,
    KRUSKAL_PSEUDOCODE, PRIM_PSEUDOCODE,
};
pub use error::{Error, Result};
pub use graph::{label_for, Edge, EdgeId, EdgeStatus, Graph, Node, NodeId};
pub use playback::{Playback, Player};
pub use random::{random_graph, random_graph_with, RandomGraphParams};
pub use session::Session;
pub use union_find::DisjointSet;
