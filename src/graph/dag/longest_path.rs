//! Longest-path queries by dynamic programming over the topological order.
//!
//! Every edge has unit length, so "longest" means most vertices. Processing
//! the order back to front guarantees that all successors of a vertex are
//! settled before the vertex itself.
//!
//! Several paths can share the maximal length. Ties go to the successor that
//! is smallest by `Ord`, which keeps results reproducible.

use std::collections::BTreeMap;

use super::DirectedAcyclicGraph;
use crate::graph::VertexId;

/// Per-vertex best path: vertex count and the successor it continues with.
type Best<'a, T> = BTreeMap<&'a VertexId<T>, (usize, Option<&'a VertexId<T>>)>;

/// Returns the longest path that starts at `start` and follows edges forward.
///
/// The path begins with `start`, every consecutive pair is an edge of the DAG,
/// and no forward path from `start` has more vertices. A sink yields a path of
/// just itself. Returns `None` when `start` is not a vertex of the DAG.
///
/// ```
/// use acyclic::{longest_path, DirectedAcyclicGraph, DirectedGraph, VertexId};
///
/// let graph: DirectedGraph<&str> =
///     DirectedGraph::from_paths([vec!["A", "B", "C", "E"], vec!["A", "D", "E"], vec!["D", "F"]]);
/// let dag = DirectedAcyclicGraph::of(graph).unwrap();
///
/// let path = longest_path(&dag, &VertexId::from_id("A")).unwrap();
/// let ids: Vec<_> = path.iter().map(|v| *v.id()).collect();
/// assert_eq!(ids, ["A", "B", "C", "E"]);
///
/// assert!(longest_path(&dag, &VertexId::from_id("X")).is_none());
/// ```
pub fn longest_path<T: Ord + Clone>(
    dag: &DirectedAcyclicGraph<T>,
    start: &VertexId<T>,
) -> Option<Vec<VertexId<T>>> {
    let order = dag.topological_order();
    // Nothing before `start` in the order is reachable from it.
    let pos = order.iter().position(|v| v == start)?;
    let adjacency = dag.adjacency();
    let best = longest_from(&order[pos..], &adjacency);
    Some(walk(&order[pos], &best))
}

/// Returns a longest path anywhere in the DAG, or `None` if it has no edges.
///
/// Among equally long paths, the one with the smallest starting vertex wins.
pub fn critical_path<T: Ord + Clone>(dag: &DirectedAcyclicGraph<T>) -> Option<Vec<VertexId<T>>> {
    let adjacency = dag.adjacency();
    let best = longest_from(dag.topological_order(), &adjacency);

    let mut start: Option<(&VertexId<T>, usize)> = None;
    for (&vertex, &(len, _)) in &best {
        if start.map_or(true, |(_, longest)| len > longest) {
            start = Some((vertex, len));
        }
    }

    start.map(|(vertex, _)| walk(vertex, &best))
}

/// Computes, for every vertex, the number of edges on the longest path that
/// ends at it. Sources map to `0`.
///
/// This is a path depth, not an in-degree: a vertex reached through a long
/// chain and a short edge counts the chain, and a vertex with several incoming
/// edges is not credited once per edge. Every vertex appears in the result,
/// sources included.
pub fn compute_maximum_path_lengths_to_each_node<T: Ord + Clone>(
    dag: &DirectedAcyclicGraph<T>,
) -> BTreeMap<VertexId<T>, usize> {
    let order = dag.topological_order();
    let adjacency = dag.adjacency();

    let mut dist: BTreeMap<&VertexId<T>, usize> = order.iter().map(|v| (v, 0)).collect();
    for u in order {
        let du = dist.get(u).copied().unwrap_or(0);
        for &v in adjacency.get(u).into_iter().flatten() {
            if let Some(dv) = dist.get_mut(v) {
                *dv = (*dv).max(du + 1);
            }
        }
    }

    dist.into_iter().map(|(v, d)| (v.clone(), d)).collect()
}

/// Settles the best path of every vertex in `order`, back to front.
///
/// `order` must be closed under successors, which holds for any suffix of a
/// topological order.
fn longest_from<'a, T: Ord>(
    order: &'a [VertexId<T>],
    adjacency: &BTreeMap<&'a VertexId<T>, Vec<&'a VertexId<T>>>,
) -> Best<'a, T> {
    let mut best: Best<'a, T> = BTreeMap::new();
    for node in order.iter().rev() {
        let mut choice: Option<(usize, &'a VertexId<T>)> = None;
        // Successor lists are ascending; only a strictly longer path replaces the choice.
        for &succ in adjacency.get(node).into_iter().flatten() {
            if let Some(&(len, _)) = best.get(succ) {
                if choice.map_or(true, |(longest, _)| len > longest) {
                    choice = Some((len, succ));
                }
            }
        }

        let entry = match choice {
            Some((len, succ)) => (len + 1, Some(succ)),
            None => (1, None),
        };
        best.insert(node, entry);
    }
    best
}

/// Follows the recorded successors from `start`.
fn walk<'a, T: Ord + Clone>(start: &'a VertexId<T>, best: &Best<'a, T>) -> Vec<VertexId<T>> {
    let len = best.get(start).map_or(1, |&(len, _)| len);
    let mut path = Vec::with_capacity(len);
    let mut cur = Some(start);
    while let Some(vertex) = cur {
        path.push(vertex.clone());
        cur = best.get(vertex).and_then(|&(_, next)| next);
    }
    path
}
