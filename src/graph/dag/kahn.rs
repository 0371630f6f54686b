//! Kahn's algorithm over an edge set.
//!
//! In-degrees are counted once up front and decremented as edges are drained,
//! so each edge is visited a constant number of times. The ready set is
//! ordered: among vertices that reach in-degree zero together, the smallest
//! is emitted first.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, VertexId};

/// Computes a topological order of `graph`.
///
/// Only vertices incident to at least one edge take part; the graph cannot
/// represent any other vertex.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] when edges remain after the ready set
/// runs dry.
pub(super) fn topological_sort<T: Ord + Clone>(
    graph: &DirectedGraph<T>,
) -> Result<Vec<VertexId<T>>> {
    let mut indeg: BTreeMap<&VertexId<T>, usize> = BTreeMap::new();
    let mut out: BTreeMap<&VertexId<T>, Vec<&VertexId<T>>> = BTreeMap::new();
    for edge in graph.edges() {
        indeg.entry(edge.from()).or_insert(0);
        *indeg.entry(edge.to()).or_insert(0) += 1;
        out.entry(edge.from()).or_default().push(edge.to());
    }

    // Sources: vertices that appear as a tail but never as a head.
    let mut ready: BTreeSet<&VertexId<T>> = indeg
        .iter()
        .filter(|&(_, &d)| d == 0)
        .map(|(&v, _)| v)
        .collect();

    let mut order = Vec::with_capacity(indeg.len());
    let mut drained = 0usize;
    while let Some(n) = ready.pop_first() {
        order.push(n.clone());

        for &m in out.get(n).into_iter().flatten() {
            drained += 1;
            if let Some(d) = indeg.get_mut(m) {
                *d -= 1;
                if *d == 0 {
                    ready.insert(m);
                }
            }
        }
    }

    let remaining_edges = graph.edge_count() - drained;
    if remaining_edges > 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            remaining_edges,
            ordered_vertices = order.len(),
            "cycle detected during topological sort"
        );
        return Err(GraphError::CycleDetected { remaining_edges });
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        vertices = order.len(),
        edges = graph.edge_count(),
        "topological order computed"
    );

    Ok(order)
}
