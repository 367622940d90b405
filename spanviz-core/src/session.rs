//! Visualizer Session
//!
//! Ties a graph and an algorithm choice to their generated step sequence.
//! The sequence is computed lazily on first use (play, single-step, or
//! show-answer all need it) and cached; editing the graph, switching the
//! algorithm, or resetting invalidates the cache so the next use
//! regenerates against current state.
//!
//! The cache sits behind a `parking_lot` lock so a multi-threaded host can
//! share a session immutably; all mutation goes through `&mut self` and is
//! the caller's to serialize, per the crate's cooperative model.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::debug;

use crate::algo::{generate, Algorithm, Generation};
use crate::error::Result;
use crate::graph::{EdgeId, EdgeStatus, Graph, NodeId};
use crate::playback::Playback;

/// A graph plus algorithm selection with a cached generator run.
#[derive(Debug)]
pub struct Session {
    graph: Graph,
    algorithm: Algorithm,
    cache: RwLock<Option<Arc<Generation>>>,
}

impl Session {
    pub fn new(graph: Graph, algorithm: Algorithm) -> Self {
        Self {
            graph,
            algorithm,
            cache: RwLock::new(None),
        }
    }

    /// The current graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Switch algorithms. Always invalidates, matching the visualizer's
    /// reset-on-change behavior.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.invalidate();
    }

    /// Replace the graph wholesale (e.g. with a freshly generated one).
    pub fn set_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.invalidate();
    }

    /// Add a node at a layout position.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = self.graph.add_node(x, y);
        self.invalidate();
        id
    }

    /// Add an edge between existing nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) -> Result<EdgeId> {
        let id = self.graph.add_edge(a, b, weight)?;
        self.invalidate();
        Ok(id)
    }

    /// Remove a node and its incident edges.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        self.graph.remove_node(id)?;
        self.invalidate();
        Ok(())
    }

    /// Remove an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<()> {
        self.graph.remove_edge(id)?;
        self.invalidate();
        Ok(())
    }

    /// Remove everything, leaving an empty canvas.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.invalidate();
    }

    /// Reset the run: edge statuses back to unvisited, cache dropped.
    pub fn reset(&mut self) {
        self.graph.reset_statuses();
        self.invalidate();
    }

    /// The generator run for the current graph and algorithm, computing it
    /// on first use.
    pub fn generation(&self) -> Result<Arc<Generation>> {
        let cache = self.cache.upgradable_read();
        if let Some(generation) = cache.as_ref() {
            return Ok(Arc::clone(generation));
        }
        let generation = Arc::new(generate(&self.graph, self.algorithm)?);
        debug!(
            algorithm = self.algorithm.display_name(),
            steps = generation.step_count(),
            "cached fresh step sequence"
        );
        let mut cache = RwLockUpgradableReadGuard::upgrade(cache);
        *cache = Some(Arc::clone(&generation));
        Ok(generation)
    }

    /// A fresh playback over the current run, starting at the baseline.
    pub fn playback(&self) -> Result<Playback> {
        let generation = self.generation()?;
        Ok(Playback::from_generation(self.graph.clone(), &generation))
    }

    /// The final answer: the graph with tree edges included and all other
    /// edges excluded, plus a summary sentence.
    pub fn show_answer(&self) -> Result<(Graph, String)> {
        let generation = self.generation()?;
        let mut graph = self.graph.clone();
        let ids: Vec<_> = graph.edges().map(|e| e.id()).collect();
        for id in ids {
            let status = if generation.mst.contains(id) {
                EdgeStatus::Included
            } else {
                EdgeStatus::Excluded
            };
            graph.set_status(id, status);
        }
        let summary = format!(
            "MST found via {}. Total weight: {}.",
            self.algorithm.display_name(),
            generation.mst.total_weight
        );
        Ok((graph, summary))
    }

    fn invalidate(&mut self) {
        if self.cache.get_mut().take().is_some() {
            debug!("step sequence cache invalidated");
        }
    }
}
