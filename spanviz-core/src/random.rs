//! Random Graph Generation
//!
//! Produces the practice graphs the visualizer starts from. Nodes are
//! placed on a circle with a little radial jitter; candidate edges are all
//! unordered pairs ranked by geometric distance, so the graph prefers
//! short, legible edges. A spanning skeleton is selected first, always
//! picking the shortest candidate that touches the connected set, which
//! guarantees connectivity at any density. The rest of the density-implied
//! edge count is then filled with the shortest leftover candidates.
//!
//! Weights are drawn uniformly from the configured range and are unrelated
//! to distance, which is what makes the exercises interesting.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Parameters for [`random_graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomGraphParams {
    /// Number of nodes, at least 1.
    pub node_count: usize,
    /// Fraction of all possible edges to aim for, in `[0, 1]`.
    pub density: f64,
    /// Smallest weight, at least 1.
    pub min_weight: u32,
    /// Largest weight, at least `min_weight`.
    pub max_weight: u32,
    /// Layout canvas width.
    pub width: f64,
    /// Layout canvas height.
    pub height: f64,
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        Self {
            node_count: 6,
            density: 0.5,
            min_weight: 1,
            max_weight: 20,
            width: 500.0,
            height: 400.0,
        }
    }
}

impl RandomGraphParams {
    fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(Error::InvalidParams("node_count must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidParams(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(Error::InvalidParams(format!(
                "weight range {}..={} is invalid",
                self.min_weight, self.max_weight
            )));
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidParams("canvas extent must be positive".into()));
        }
        Ok(())
    }
}

/// A candidate pair, ranked by layout distance.
struct Candidate {
    a: NodeId,
    b: NodeId,
    distance: f64,
}

/// Generate a connected random graph using the thread-local RNG.
pub fn random_graph(params: &RandomGraphParams) -> Result<Graph> {
    random_graph_with(params, &mut rand::thread_rng())
}

/// Generate a connected random graph from a caller-supplied RNG (seed it
/// for reproducible graphs).
pub fn random_graph_with<R: Rng + ?Sized>(params: &RandomGraphParams, rng: &mut R) -> Result<Graph> {
    params.validate()?;

    let n = params.node_count;
    let radius = (params.width.min(params.height) / 3.0 - 30.0).max(40.0);
    let center_x = params.width / 2.0;
    let center_y = params.height / 2.0;

    let mut graph = Graph::new();
    for i in 0..n {
        let angle = (i as f64) * 2.0 * std::f64::consts::PI / (n as f64);
        let jitter = rng.gen_range(-10.0..10.0);
        let node_radius = radius + jitter;
        graph.add_node(
            center_x + node_radius * angle.cos(),
            center_y + node_radius * angle.sin(),
        );
    }

    let mut candidates = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
    let nodes: Vec<_> = graph.nodes().map(|node| (node.id(), node.x(), node.y())).collect();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let (a, ax, ay) = nodes[i];
            let (b, bx, by) = nodes[j];
            let distance = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
            candidates.push(Candidate { a, b, distance });
        }
    }
    candidates.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    // Spanning skeleton: repeatedly take the shortest candidate with
    // exactly one endpoint already connected.
    let mut connected = vec![false; n];
    connected[0] = true;
    let mut connected_count = 1;
    let mut skeleton = Vec::new();
    while connected_count < n {
        let position = candidates.iter().position(|c| {
            connected[c.a.raw() as usize] ^ connected[c.b.raw() as usize]
        });
        let Some(position) = position else {
            break;
        };
        let candidate = candidates.remove(position);
        for id in [candidate.a, candidate.b] {
            let slot = &mut connected[id.raw() as usize];
            if !*slot {
                *slot = true;
                connected_count += 1;
            }
        }
        skeleton.push(candidate);
    }

    let max_possible = n * n.saturating_sub(1) / 2;
    let target = (max_possible as f64 * params.density).ceil() as usize;
    let extra = target.saturating_sub(skeleton.len());

    for candidate in skeleton.iter().chain(candidates.iter().take(extra)) {
        let weight = rng.gen_range(params.min_weight..=params.max_weight);
        graph.add_edge(candidate.a, candidate.b, weight)?;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        target,
        "generated random graph"
    );
    Ok(graph)
}
