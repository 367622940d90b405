//! Kruskal's Step Generator
//!
//! Examines every edge in ascending weight order (stable for ties) and
//! uses the disjoint-set to decide whether each one closes a cycle. The
//! run is exhaustive: edges keep being examined after the tree is already
//! complete, so the visualization accounts for every edge.
//!
//! The sorted-edge panel snapshots are computed with knowledge of the
//! decisions made so far: entries before the current index resolve to
//! included/excluded, the current entry shows as the candidate, and the
//! tail stays unvisited. The checking step's component snapshot is taken
//! before the union, the decision step's after.

use tracing::trace;

use crate::error::Result;
use crate::graph::{Edge, EdgeStatus, Graph};
use crate::union_find::DisjointSet;

use super::step::{EdgeUpdate, SortedEdge, Step};
use super::{baseline_edges, node_label, Generation, MstResult, KRUSKAL_PSEUDOCODE};

/// Panel snapshot while edge `current` is being checked: everything before
/// it is resolved, everything after it untouched.
fn checking_snapshot(sorted: &[Edge], mst: &[Edge], current: usize) -> Vec<SortedEdge> {
    sorted
        .iter()
        .enumerate()
        .map(|(idx, edge)| {
            let status = if idx < current {
                membership(mst, edge)
            } else if idx == current {
                EdgeStatus::Candidate
            } else {
                EdgeStatus::Unvisited
            };
            SortedEdge::of(edge, status)
        })
        .collect()
}

/// Panel snapshot after the decision on edge `current`: it and everything
/// before it are resolved.
fn decided_snapshot(sorted: &[Edge], mst: &[Edge], current: usize) -> Vec<SortedEdge> {
    sorted
        .iter()
        .enumerate()
        .map(|(idx, edge)| {
            let status = if idx <= current {
                membership(mst, edge)
            } else {
                EdgeStatus::Unvisited
            };
            SortedEdge::of(edge, status)
        })
        .collect()
}

fn membership(mst: &[Edge], edge: &Edge) -> EdgeStatus {
    if mst.iter().any(|m| m.id() == edge.id()) {
        EdgeStatus::Included
    } else {
        EdgeStatus::Excluded
    }
}

pub(super) fn generate(graph: &Graph) -> Result<Generation> {
    let mut sorted = baseline_edges(graph);
    sorted.sort_by_key(|edge| edge.weight());

    let mut sets = DisjointSet::new(graph.node_ids())?;
    let mut steps = Vec::new();
    let mut mst_edges: Vec<Edge> = Vec::new();

    let all_candidates: Vec<SortedEdge> = sorted
        .iter()
        .map(|edge| SortedEdge::of(edge, EdgeStatus::Candidate))
        .collect();

    steps.push(Step {
        edge_updates: sorted
            .iter()
            .map(|edge| EdgeUpdate {
                id: edge.id(),
                status: EdgeStatus::Candidate,
            })
            .collect(),
        sorted_edges: Some(all_candidates.clone()),
        union_find: Some(sets.components()),
        explanation: "Kruskal's: sorted edges by weight in non-decreasing order.".to_string(),
        algorithm_step: KRUSKAL_PSEUDOCODE[0].to_string(),
        ..Step::default()
    });

    // Illustrative only: the partition is already all singletons.
    steps.push(Step {
        sorted_edges: Some(all_candidates),
        union_find: Some(sets.components()),
        explanation: "Initialized Union-Find. Each node in its own set.".to_string(),
        algorithm_step: KRUSKAL_PSEUDOCODE[1].to_string(),
        ..Step::default()
    });

    for i in 0..sorted.len() {
        let edge = sorted[i].clone();
        let (source, target) = (edge.source(), edge.target());
        let source_label = node_label(graph, source);
        let target_label = node_label(graph, target);

        let root_source = sets.find(source);
        let root_target = sets.find(target);

        steps.push(Step {
            edge_updates: vec![EdgeUpdate {
                id: edge.id(),
                status: EdgeStatus::Candidate,
            }],
            sorted_edges: Some(checking_snapshot(&sorted, &mst_edges, i)),
            union_find: Some(sets.components()),
            explanation: format!(
                "Examining edge {source_label}-{target_label} (weight {}). Checking cycle...",
                edge.weight()
            ),
            algorithm_step: KRUSKAL_PSEUDOCODE[3].to_string(),
            ..Step::default()
        });

        if root_source != root_target {
            sets.union(source, target);
            mst_edges.push(edge.clone());
            trace!(edge = %edge.id(), "edge added to tree");

            steps.push(Step {
                edge_updates: vec![EdgeUpdate {
                    id: edge.id(),
                    status: EdgeStatus::Included,
                }],
                sorted_edges: Some(decided_snapshot(&sorted, &mst_edges, i)),
                union_find: Some(sets.components()),
                explanation: format!(
                    "No cycle! Adding edge {source_label}-{target_label} to MST."
                ),
                algorithm_step: KRUSKAL_PSEUDOCODE[4].to_string(),
                ..Step::default()
            });
        } else {
            trace!(edge = %edge.id(), "edge closes a cycle");
            steps.push(Step {
                edge_updates: vec![EdgeUpdate {
                    id: edge.id(),
                    status: EdgeStatus::Excluded,
                }],
                sorted_edges: Some(decided_snapshot(&sorted, &mst_edges, i)),
                union_find: Some(sets.components()),
                explanation: format!(
                    "Cycle detected! Skipping edge {source_label}-{target_label}."
                ),
                algorithm_step: KRUSKAL_PSEUDOCODE[3].to_string(),
                ..Step::default()
            });
        }
    }

    Ok(Generation {
        steps,
        mst: MstResult::from_edges(mst_edges),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, NodeId};

    fn nid(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    fn eid(a: u32, b: u32) -> EdgeId {
        EdgeId::new(nid(a), nid(b)).unwrap()
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

    fn checking_steps(generation: &Generation) -> Vec<&Step> {
        generation
            .steps
            .iter()
            .filter(|s| s.algorithm_step == KRUSKAL_PSEUDOCODE[3] && s.explanation.starts_with("Examining"))
            .collect()
    }

    #[test]
    fn finds_the_expected_tree() {
        let generation = generate(&diamond()).unwrap();
        let ids: Vec<EdgeId> = generation.mst.edges.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![eid(0, 1), eid(1, 2), eid(2, 3)]);
        assert_eq!(generation.mst.total_weight, 6);
    }

    #[test]
    fn every_edge_is_checked_exactly_once_in_weight_order() {
        let generation = generate(&diamond()).unwrap();
        let checking = checking_steps(&generation);
        assert_eq!(checking.len(), 5);
        let weights: Vec<u32> = checking
            .iter()
            .map(|s| {
                let snapshot = s.sorted_edges.as_ref().unwrap();
                let current = snapshot
                    .iter()
                    .find(|e| e.status == EdgeStatus::Candidate)
                    .unwrap();
                current.weight
            })
            .collect();
        assert_eq!(weights, vec![1, 2, 3, 5, 10]);
    }

    #[test]
    fn first_two_steps_are_sort_and_init() {
        let generation = generate(&diamond()).unwrap();
        let sort_step = &generation.steps[0];
        assert_eq!(sort_step.algorithm_step, KRUSKAL_PSEUDOCODE[0]);
        // The sort step marks every edge as a candidate.
        assert_eq!(sort_step.edge_updates.len(), 5);
        let snapshot = sort_step.sorted_edges.as_ref().unwrap();
        assert!(snapshot.iter().all(|e| e.status == EdgeStatus::Candidate));

        let init_step = &generation.steps[1];
        assert_eq!(init_step.algorithm_step, KRUSKAL_PSEUDOCODE[1]);
        assert!(init_step.edge_updates.is_empty());
        // All singletons before any union.
        let components = init_step.union_find.as_ref().unwrap();
        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn checking_components_predate_the_union() {
        let generation = generate(&diamond()).unwrap();
        let checking = checking_steps(&generation);
        // When 1-2 (the second edge) is checked, only the 0-1 union has
        // happened.
        let components = checking[1].union_find.as_ref().unwrap();
        assert_eq!(components.len(), 3);
        // The decision step that follows carries the post-union partition.
        let decision = &generation.steps[5];
        let after = decision.union_find.as_ref().unwrap();
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn cycle_edges_are_excluded_and_unions_skipped() {
        let generation = generate(&diamond()).unwrap();
        let excluded: Vec<EdgeId> = generation
            .steps
            .iter()
            .flat_map(|s| &s.edge_updates)
            .filter(|u| u.status == EdgeStatus::Excluded)
            .map(|u| u.id)
            .collect();
        assert_eq!(excluded, vec![eid(0, 2), eid(0, 3)]);
        // The partition never splits back apart: one component at the end.
        let final_components = generation
            .steps
            .last()
            .unwrap()
            .union_find
            .as_ref()
            .unwrap();
        assert_eq!(final_components.len(), 1);
    }

    #[test]
    fn snapshot_tail_stays_unvisited_until_reached() {
        let generation = generate(&diamond()).unwrap();
        let checking = checking_steps(&generation);
        let snapshot = checking[0].sorted_edges.as_ref().unwrap();
        assert_eq!(snapshot[0].status, EdgeStatus::Candidate);
        assert!(snapshot[1..]
            .iter()
            .all(|e| e.status == EdgeStatus::Unvisited));
    }

    #[test]
    fn ties_break_by_encounter_order() {
        // A-B and A-C both weigh 5; B-C weighs 1. B-C goes first, then the
        // tie resolves in insertion order: A-B included, A-C excluded.
        let mut graph = Graph::new();
        for i in 0..3 {
            graph.add_node(f64::from(i), 0.0);
        }
        graph.add_edge(nid(0), nid(1), 5).unwrap();
        graph.add_edge(nid(0), nid(2), 5).unwrap();
        graph.add_edge(nid(1), nid(2), 1).unwrap();

        let generation = generate(&graph).unwrap();
        let ids: Vec<EdgeId> = generation.mst.edges.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![eid(1, 2), eid(0, 1)]);
        assert_eq!(generation.mst.total_weight, 6);

        let excluded: Vec<EdgeId> = generation
            .steps
            .iter()
            .flat_map(|s| &s.edge_updates)
            .filter(|u| u.status == EdgeStatus::Excluded)
            .map(|u| u.id)
            .collect();
        assert_eq!(excluded, vec![eid(0, 2)]);
    }

    #[test]
    fn zero_edge_graph_emits_only_the_setup_steps() {
        let mut graph = Graph::new();
        graph.add_node(0.0, 0.0);
        graph.add_node(1.0, 0.0);
        let generation = generate(&graph).unwrap();
        assert_eq!(generation.step_count(), 2);
        assert!(generation.mst.edges.is_empty());
        assert_eq!(generation.mst.total_weight, 0);
    }

    #[test]
    fn disconnected_graph_yields_a_forest() {
        let mut graph = Graph::new();
        for i in 0..4 {
            graph.add_node(f64::from(i), 0.0);
        }
        graph.add_edge(nid(0), nid(1), 1).unwrap();
        graph.add_edge(nid(2), nid(3), 2).unwrap();

        let generation = generate(&graph).unwrap();
        assert_eq!(generation.mst.edges.len(), 2);
        let final_components = generation
            .steps
            .last()
            .unwrap()
            .union_find
            .as_ref()
            .unwrap();
        assert_eq!(final_components.len(), 2);
    }
}
