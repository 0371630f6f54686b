//! `proptest` strategies for graph values.
//!
//! Enabled by the `proptest` feature. Vertices are `u32` ids drawn from
//! `0..max_vertices`.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::graph::{DirectedEdge, DirectedGraph, VertexId};

fn edge(from: u32, to: u32) -> DirectedEdge<u32> {
    DirectedEdge::between_vertices(VertexId::from_id(from), VertexId::from_id(to))
}

/// Arbitrary directed graphs, cycles and self-loops included.
pub fn arb_graph(
    max_vertices: u32,
    max_edges: usize,
) -> impl Strategy<Value = DirectedGraph<u32>> {
    let max_vertices = max_vertices.max(1);
    vec((0..max_vertices, 0..max_vertices), 0..=max_edges).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(from, to)| edge(from, to))
            .collect::<DirectedGraph<u32>>()
    })
}

/// Directed graphs that are guaranteed acyclic.
///
/// Vertex ids are relabelled through a random permutation after every edge is
/// pointed from the lower to the higher rank, so the topological order is not
/// simply ascending ids.
pub fn arb_acyclic_graph(
    max_vertices: u32,
    max_edges: usize,
) -> impl Strategy<Value = DirectedGraph<u32>> {
    let max_vertices = max_vertices.max(2);
    let ranks: Vec<u32> = (0..max_vertices).collect();
    (
        vec((0..max_vertices, 0..max_vertices), 0..=max_edges),
        Just(ranks).prop_shuffle(),
    )
        .prop_map(|(pairs, labels)| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| {
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    edge(labels[lo as usize], labels[hi as usize])
                })
                .collect::<DirectedGraph<u32>>()
        })
}

/// Vertex sequences suitable for `DirectedGraph::from_paths`.
pub fn arb_paths(
    max_vertices: u32,
    max_paths: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<Vec<u32>>> {
    let max_vertices = max_vertices.max(1);
    vec(vec(0..max_vertices, 0..=max_len), 0..=max_paths)
}
