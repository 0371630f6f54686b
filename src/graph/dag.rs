//! Directed acyclic graphs with a precomputed topological order.
//!
//! [`DirectedAcyclicGraph::of`] is the only way to obtain a DAG: it runs Kahn's
//! algorithm over the edge set and fails with [`GraphError::CycleDetected`]
//! when no topological order exists. The order is computed once and never
//! changes afterwards.
//!
//! Path queries built on that order live in [`longest_path`]:
//! [`longest_path`](longest_path::longest_path) from a given vertex, the
//! overall [`critical_path`](longest_path::critical_path), and the per-vertex
//! [`compute_maximum_path_lengths_to_each_node`](longest_path::compute_maximum_path_lengths_to_each_node).

use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::{BTreeMap, BTreeSet};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{DirectedEdge, DirectedGraph, VertexId};
use crate::error::{GraphError, Result};

mod kahn;
pub mod longest_path;

/// Number of vertices shown by the `Display` summary.
const DISPLAY_VERTEX_LIMIT: usize = 50;

/// A directed graph proven acyclic, paired with one of its topological orders.
///
/// Equality and hashing only consider the wrapped graph: when independent
/// branches allow several valid orders, DAGs over the same edge set are still
/// equal.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `of` | \(O((n + m) \log n)\) | Kahn's algorithm with in-degree counters |
/// | `topological_order` | \(O(1)\) | Computed once at construction |
/// | `longest_path` | \(O((n + m) \log n)\) | DP over the reversed order suffix |
/// | `critical_path` | \(O((n + m) \log n)\) | DP over the full reversed order |
pub struct DirectedAcyclicGraph<T> {
    graph: DirectedGraph<T>,
    topo_order: Vec<VertexId<T>>,
}

impl<T: Ord + Clone> DirectedAcyclicGraph<T> {
    /// Proves `graph` acyclic and computes its topological order.
    ///
    /// Among vertices that become ready at the same time, the smallest one
    /// (by `Ord` on its id) is placed first, so the order is deterministic.
    ///
    /// # Errors
    /// Returns [`GraphError::CycleDetected`] if the graph contains a cycle.
    ///
    /// ```
    /// use acyclic::{DirectedAcyclicGraph, DirectedGraph};
    ///
    /// let graph: DirectedGraph<&str> =
    ///     DirectedGraph::from_paths([vec!["A", "C"], vec!["B", "C"]]);
    /// let dag = DirectedAcyclicGraph::of(graph).unwrap();
    ///
    /// let order: Vec<_> = dag.topological_order().iter().map(|v| *v.id()).collect();
    /// assert_eq!(order, ["A", "B", "C"]);
    /// ```
    pub fn of(graph: DirectedGraph<T>) -> Result<Self> {
        let topo_order = kahn::topological_sort(&graph)?;
        let dag = Self { graph, topo_order };
        debug_assert!(
            dag.validate_invariants(),
            "topological order must list every vertex once and respect every edge"
        );
        Ok(dag)
    }

    /// Checks that the stored order is a valid topological order.
    ///
    /// Verifies that:
    /// 1. Every vertex of the graph appears in the order exactly once
    /// 2. Every edge points from an earlier to a later vertex
    ///
    /// Construction already guarantees both; this exists for debug assertions
    /// and tests.
    pub fn validate_invariants(&self) -> bool {
        let mut position = BTreeMap::new();
        for (pos, vertex) in self.topo_order.iter().enumerate() {
            if position.insert(vertex, pos).is_some() {
                return false;
            }
        }

        if position.len() != self.graph.vertices().len() {
            return false;
        }

        self.graph.edges().iter().all(|edge| {
            match (position.get(edge.from()), position.get(edge.to())) {
                (Some(from), Some(to)) => from < to,
                _ => false,
            }
        })
    }

    /// Vertices without incoming edges, ascending.
    pub fn sources(&self) -> BTreeSet<VertexId<T>> {
        let targets: BTreeSet<_> = self.graph.edges().iter().map(DirectedEdge::to).collect();
        self.graph
            .edges()
            .iter()
            .map(|e| e.from())
            .filter(|v| !targets.contains(v))
            .cloned()
            .collect()
    }

    /// Vertices without outgoing edges, ascending.
    pub fn sinks(&self) -> BTreeSet<VertexId<T>> {
        let tails: BTreeSet<_> = self.graph.edges().iter().map(|e| e.from()).collect();
        self.graph
            .edges()
            .iter()
            .map(DirectedEdge::to)
            .filter(|v| !tails.contains(v))
            .cloned()
            .collect()
    }

    /// Out-adjacency keyed by tail vertex; successor lists are ascending.
    pub(crate) fn adjacency(&self) -> BTreeMap<&VertexId<T>, Vec<&VertexId<T>>> {
        let mut adjacency: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for edge in self.graph.edges() {
            adjacency.entry(edge.from()).or_default().push(edge.to());
        }
        adjacency
    }
}

impl<T> DirectedAcyclicGraph<T> {
    /// The wrapped graph.
    #[inline]
    pub fn directed_graph(&self) -> &DirectedGraph<T> {
        &self.graph
    }

    /// The edge set of the wrapped graph.
    #[inline]
    pub fn edges(&self) -> &BTreeSet<DirectedEdge<T>> {
        self.graph.edges()
    }

    /// The topological order computed at construction.
    #[inline]
    pub fn topological_order(&self) -> &[VertexId<T>] {
        &self.topo_order
    }

    /// Number of vertices.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.topo_order.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Discards the order and returns the wrapped graph.
    pub fn into_directed_graph(self) -> DirectedGraph<T> {
        self.graph
    }
}

impl<T: Ord + Clone> TryFrom<DirectedGraph<T>> for DirectedAcyclicGraph<T> {
    type Error = GraphError;

    fn try_from(graph: DirectedGraph<T>) -> Result<Self> {
        Self::of(graph)
    }
}

impl<T: Clone> Clone for DirectedAcyclicGraph<T> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            topo_order: self.topo_order.clone(),
        }
    }
}

// The order is derived data; two DAGs over the same edges are the same DAG.
impl<T: Ord> PartialEq for DirectedAcyclicGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

impl<T: Ord> Eq for DirectedAcyclicGraph<T> {}

impl<T: Hash> Hash for DirectedAcyclicGraph<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.graph.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DirectedAcyclicGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedAcyclicGraph")
            .field("graph", &self.graph)
            .field("topo_order", &self.topo_order)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DirectedAcyclicGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DAG: ")?;
        for (i, vertex) in self.topo_order.iter().take(DISPLAY_VERTEX_LIMIT).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", vertex.id())?;
        }
        if self.topo_order.len() > DISPLAY_VERTEX_LIMIT {
            f.write_str("...")?;
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for DirectedAcyclicGraph<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.graph.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for DirectedAcyclicGraph<T>
where
    T: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let graph = DirectedGraph::deserialize(deserializer)?;
        Self::of(graph).map_err(de::Error::custom)
    }
}
