//! Playback Controller
//!
//! Owns a generated step sequence, a cursor, and the materialized view the
//! renderer draws: the graph's edge statuses plus the side-panel state
//! (visited set, min-heap, sorted edges, union-find components, explanation
//! and pseudocode line).
//!
//! Steps are applied strictly in order from a known baseline: all edges
//! unvisited, every panel empty. Applying a step sets its edge statuses and
//! REPLACES any panel state the step carries a snapshot for. Scrubbing
//! backwards replays from the baseline; steps are not diffable and are
//! never applied out of order.

use std::time::Duration;

use crate::algo::{Generation, MstResult, QueueEntry, SortedEdge, Step};
use crate::graph::{EdgeStatus, Graph, NodeId};

/// Cursor-driven replay of a step sequence over a materialized graph.
#[derive(Debug, Clone)]
pub struct Playback {
    graph: Graph,
    steps: Vec<Step>,
    cursor: usize,
    visited: Vec<NodeId>,
    min_heap: Vec<QueueEntry>,
    sorted_edges: Vec<SortedEdge>,
    union_find: Vec<Vec<NodeId>>,
    explanation: String,
    algorithm_step: String,
}

impl Playback {
    /// Start a replay of `steps` over `graph`, from the baseline.
    pub fn new(mut graph: Graph, steps: Vec<Step>) -> Self {
        graph.reset_statuses();
        Self {
            graph,
            steps,
            cursor: 0,
            visited: Vec::new(),
            min_heap: Vec::new(),
            sorted_edges: Vec::new(),
            union_find: Vec::new(),
            explanation: String::new(),
            algorithm_step: String::new(),
        }
    }

    /// Convenience constructor from a generator run.
    pub fn from_generation(graph: Graph, generation: &Generation) -> Self {
        Self::new(graph, generation.steps.clone())
    }

    /// The materialized graph (edge statuses as of the cursor).
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Steps applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether every step has been applied.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Prim's visited set as of the cursor.
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    /// Prim's priority queue as of the cursor.
    pub fn min_heap(&self) -> &[QueueEntry] {
        &self.min_heap
    }

    /// Kruskal's sorted edge list as of the cursor.
    pub fn sorted_edges(&self) -> &[SortedEdge] {
        &self.sorted_edges
    }

    /// Union-find components as of the cursor.
    pub fn union_find(&self) -> &[Vec<NodeId>] {
        &self.union_find
    }

    /// Explanation of the most recently applied step.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Pseudocode line of the most recently applied step.
    pub fn algorithm_step(&self) -> &str {
        &self.algorithm_step
    }

    /// Apply the step at the cursor and advance.
    ///
    /// Returns `false` once the sequence is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.cursor >= self.steps.len() {
            return false;
        }
        let step = self.steps[self.cursor].clone();
        self.apply(&step);
        self.cursor += 1;
        true
    }

    /// Scrub to the state after `n` applied steps (clamped to the end).
    pub fn seek(&mut self, n: usize) {
        let n = n.min(self.steps.len());
        if n < self.cursor {
            self.reset();
        }
        while self.cursor < n {
            self.advance();
        }
    }

    /// Return to the baseline: all edges unvisited, panels empty.
    pub fn reset(&mut self) {
        self.graph.reset_statuses();
        self.visited.clear();
        self.min_heap.clear();
        self.sorted_edges.clear();
        self.union_find.clear();
        self.explanation.clear();
        self.algorithm_step.clear();
        self.cursor = 0;
    }

    /// Jump straight to the final answer: tree edges included, everything
    /// else excluded. Not the same as seeking to the end, because edges
    /// the algorithm never examined are excluded too.
    pub fn show_answer(&mut self, mst: &MstResult) {
        let ids: Vec<_> = self.graph.edges().map(|e| e.id()).collect();
        for id in ids {
            let status = if mst.contains(id) {
                EdgeStatus::Included
            } else {
                EdgeStatus::Excluded
            };
            self.graph.set_status(id, status);
        }
    }

    fn apply(&mut self, step: &Step) {
        for update in &step.edge_updates {
            // Updates for edges the graph no longer has are ignored, like
            // the front end's by-id lookup.
            self.graph.set_status(update.id, update.status);
        }
        if let Some(visited) = &step.visited_nodes {
            self.visited = visited.clone();
        }
        if let Some(heap) = &step.min_heap {
            self.min_heap = heap.clone();
        }
        if let Some(sorted) = &step.sorted_edges {
            self.sorted_edges = sorted.clone();
        }
        if let Some(components) = &step.union_find {
            self.union_find = components.clone();
        }
        self.explanation = step.explanation.clone();
        self.algorithm_step = step.algorithm_step.clone();
    }
}

/// Timed auto-play over a [`Playback`].
///
/// Mirrors the visualizer's animation loop: wait the configured delay,
/// apply one step, invoke the callback, repeat until the sequence ends.
/// Cancellation is dropping the future; generation itself never blocks, so
/// the delay between steps is the only suspension point.
#[derive(Debug)]
pub struct Player {
    playback: Playback,
    delay: Duration,
}

impl Player {
    /// Default per-step delay (the visualizer's initial speed).
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(playback: Playback) -> Self {
        Self {
            playback,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Set a fixed per-step delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Map the visualizer's 1..=5 speed slider to a delay (1800ms down to
    /// 200ms).
    pub fn delay_for_speed(level: u32) -> Duration {
        let level = level.clamp(1, 5);
        Duration::from_millis(u64::from(2200 - level * 400))
    }

    /// The underlying playback.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Take the playback back out of the player.
    pub fn into_inner(self) -> Playback {
        self.playback
    }

    /// Run the remaining steps at the configured pace, calling `on_step`
    /// after each applied step.
    pub async fn play<F>(&mut self, mut on_step: F)
    where
        F: FnMut(&Playback),
    {
        loop {
            tokio::time::sleep(self.delay).await;
            if !self.playback.advance() {
                break;
            }
            on_step(&self.playback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{generate, Algorithm};
    use crate::graph::NodeId;

    fn nid(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

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

    fn included_count(graph: &Graph) -> usize {
        graph
            .edges()
            .filter(|e| e.status() == EdgeStatus::Included)
            .count()
    }

    #[test]
    fn full_replay_materializes_the_tree() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Prims).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);
        while playback.advance() {}
        assert!(playback.is_finished());
        assert_eq!(included_count(playback.graph()), 3);
        assert_eq!(playback.visited().len(), 4);
    }

    #[test]
    fn replaying_twice_gives_the_same_statuses() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Kruskals).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);

        while playback.advance() {}
        let first: Vec<_> = playback.graph().edges().map(|e| e.status()).collect();

        playback.reset();
        while playback.advance() {}
        let second: Vec<_> = playback.graph().edges().map(|e| e.status()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn seek_matches_stepwise_advance() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Kruskals).unwrap();

        let mut stepped = Playback::from_generation(graph.clone(), &generation);
        for _ in 0..5 {
            stepped.advance();
        }

        let mut sought = Playback::from_generation(graph, &generation);
        sought.seek(5);

        assert_eq!(sought.cursor(), stepped.cursor());
        assert_eq!(sought.graph(), stepped.graph());
        assert_eq!(sought.union_find(), stepped.union_find());
        assert_eq!(sought.explanation(), stepped.explanation());
    }

    #[test]
    fn seeking_backwards_replays_from_baseline() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Prims).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);
        playback.seek(generation.step_count());
        playback.seek(2);
        assert_eq!(playback.cursor(), 2);
        // After two Prim steps nothing is included yet.
        assert_eq!(included_count(playback.graph()), 0);
        assert_eq!(playback.visited(), &[nid(0)]);
    }

    #[test]
    fn seek_clamps_to_the_end() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Prims).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);
        playback.seek(usize::MAX);
        assert!(playback.is_finished());
    }

    #[test]
    fn reset_restores_baseline() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Kruskals).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);
        playback.seek(4);
        playback.reset();
        assert_eq!(playback.cursor(), 0);
        assert!(playback
            .graph()
            .edges()
            .all(|e| e.status() == EdgeStatus::Unvisited));
        assert!(playback.sorted_edges().is_empty());
        assert!(playback.union_find().is_empty());
        assert!(playback.explanation().is_empty());
    }

    #[test]
    fn show_answer_classifies_every_edge() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Prims).unwrap();
        let mut playback = Playback::from_generation(graph, &generation);
        playback.show_answer(&generation.mst);
        assert_eq!(included_count(playback.graph()), 3);
        let excluded = playback
            .graph()
            .edges()
            .filter(|e| e.status() == EdgeStatus::Excluded)
            .count();
        assert_eq!(excluded, 2);
    }

    #[tokio::test]
    async fn player_applies_every_step_at_the_configured_pace() {
        let graph = diamond();
        let generation = generate(&graph, Algorithm::Prims).unwrap();
        let playback = Playback::from_generation(graph, &generation);

        let mut player = Player::new(playback).with_delay(Duration::from_millis(1));
        let mut seen = 0usize;
        player.play(|_| seen += 1).await;

        assert_eq!(seen, generation.step_count());
        assert!(player.playback().is_finished());
    }

    #[test]
    fn speed_slider_maps_to_delays() {
        assert_eq!(Player::delay_for_speed(1), Duration::from_millis(1800));
        assert_eq!(Player::delay_for_speed(5), Duration::from_millis(200));
        // Out-of-range levels clamp.
        assert_eq!(Player::delay_for_speed(0), Duration::from_millis(1800));
        assert_eq!(Player::delay_for_speed(99), Duration::from_millis(200));
    }
}
