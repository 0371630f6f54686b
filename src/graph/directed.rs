//! Immutable directed graphs identified by their edge set.
//!
//! A [`DirectedGraph`] is a value: every operation that changes the edge set
//! returns a new graph and leaves the receiver untouched. The edge set lives
//! behind an [`Arc`], so clones are O(1) and a write only copies the set when
//! it is still shared with another graph value.
//!
//! Vertices are implied by edges. A vertex without any incident edge cannot be
//! represented, and two graphs are equal exactly when their edge sets are.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DirectedEdge, VertexId};

/// Number of edges shown by the `Display` summary.
const DISPLAY_EDGE_LIMIT: usize = 25;

/// A set of directed edges with value semantics.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `clone` | \(O(1)\) | Shares the edge set |
/// | `add_edge` / `remove_edge` | \(O(\log m)\) | Plus \(O(m)\) when the set is shared |
/// | `get_edge` | \(O(\log m)\) | |
/// | `successors` | \(O(m)\) | Stops after the last out-edge |
/// | `predecessors` | \(O(m)\) | Full scan |
pub struct DirectedGraph<T> {
    edges: Arc<BTreeSet<DirectedEdge<T>>>,
}

impl<T: Ord + Clone> DirectedGraph<T> {
    /// The graph without edges.
    pub fn empty() -> Self {
        Self::from_set(BTreeSet::new())
    }

    /// Builds a graph from an edge collection; duplicates collapse.
    pub fn of_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = DirectedEdge<T>>,
    {
        Self::from_set(edges.into_iter().collect())
    }

    /// Builds a graph by chaining consecutive vertices of every path.
    ///
    /// The path `[v0, v1, ..., vn]` contributes the edges `(v0, v1)`, `(v1, v2)`,
    /// ..., `(vn-1, vn)`. Paths with fewer than two vertices contribute nothing.
    ///
    /// ```
    /// use acyclic::DirectedGraph;
    ///
    /// let graph: DirectedGraph<&str> =
    ///     DirectedGraph::from_paths([vec!["A", "B", "C"], vec!["A", "D"]]);
    /// assert_eq!(graph.edge_count(), 3);
    /// ```
    pub fn from_paths<P, I, V>(paths: P) -> Self
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<VertexId<T>>,
    {
        let mut edges = BTreeSet::new();
        for path in paths {
            let mut vertices = path.into_iter().map(Into::into);
            let Some(mut prev) = vertices.next() else {
                continue;
            };
            for next in vertices {
                edges.insert(DirectedEdge::between_vertices(prev, next.clone()));
                prev = next;
            }
        }
        Self::from_set(edges)
    }

    fn from_set(edges: BTreeSet<DirectedEdge<T>>) -> Self {
        Self {
            edges: Arc::new(edges),
        }
    }

    /// Returns a graph that additionally contains `edge`.
    #[must_use]
    pub fn add_edge(&self, edge: DirectedEdge<T>) -> Self {
        if self.edges.contains(&edge) {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.edges).insert(edge);
        next
    }

    /// Returns a graph that additionally contains `from -> to`.
    #[must_use]
    pub fn add_edge_between(&self, from: VertexId<T>, to: VertexId<T>) -> Self {
        self.add_edge(DirectedEdge::between_vertices(from, to))
    }

    /// Returns the union of this graph with `edges`.
    #[must_use]
    pub fn add_edges<I>(&self, edges: I) -> Self
    where
        I: IntoIterator<Item = DirectedEdge<T>>,
    {
        let mut next = self.clone();
        for edge in edges {
            if !next.edges.contains(&edge) {
                Arc::make_mut(&mut next.edges).insert(edge);
            }
        }
        next
    }

    /// Returns a graph without `edge`. Absent edges leave the graph unchanged.
    #[must_use]
    pub fn remove_edge(&self, edge: &DirectedEdge<T>) -> Self {
        if !self.edges.contains(edge) {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.edges).remove(edge);
        next
    }

    /// Applies a transform to the whole edge set, yielding a new graph.
    #[must_use]
    pub fn map_edges<F>(&self, transform: F) -> Self
    where
        F: FnOnce(&BTreeSet<DirectedEdge<T>>) -> BTreeSet<DirectedEdge<T>>,
    {
        Self::from_set(transform(&self.edges))
    }

    /// Looks up the edge `from -> to`.
    pub fn get_edge(&self, from: &VertexId<T>, to: &VertexId<T>) -> Option<&DirectedEdge<T>> {
        self.edges.get(&DirectedEdge::between_vertices(from.clone(), to.clone()))
    }

    /// Edge membership test.
    pub fn contains_edge(&self, edge: &DirectedEdge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Every vertex that is an endpoint of some edge, ascending.
    pub fn vertices(&self) -> BTreeSet<VertexId<T>> {
        self.edges
            .iter()
            .flat_map(|e| [e.from().clone(), e.to().clone()])
            .collect()
    }

    /// Direct successors of `vertex`, ascending.
    pub fn successors<'a>(
        &'a self,
        vertex: &'a VertexId<T>,
    ) -> impl Iterator<Item = &'a VertexId<T>> + 'a {
        // Edges are ordered by tail first, so the out-edges of `vertex` are contiguous.
        self.edges
            .iter()
            .skip_while(move |e| e.from() < vertex)
            .take_while(move |e| e.from() == vertex)
            .map(DirectedEdge::to)
    }

    /// Direct predecessors of `vertex`, ascending by edge order.
    pub fn predecessors<'a>(
        &'a self,
        vertex: &'a VertexId<T>,
    ) -> impl Iterator<Item = &'a VertexId<T>> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.to() == vertex)
            .map(|e| e.from())
    }
}

impl<T> DirectedGraph<T> {
    /// The edge set.
    #[inline]
    pub fn edges(&self) -> &BTreeSet<DirectedEdge<T>> {
        &self.edges
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T> Clone for DirectedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            edges: Arc::clone(&self.edges),
        }
    }
}

impl<T: Ord + Clone> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> PartialEq for DirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.edges, &other.edges) || *self.edges == *other.edges
    }
}

impl<T: Ord> Eq for DirectedGraph<T> {}

impl<T: Hash> Hash for DirectedGraph<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("edges", &*self.edges)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DG: ")?;
        for (i, edge) in self.edges.iter().take(DISPLAY_EDGE_LIMIT).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{edge}")?;
        }
        if self.edges.len() > DISPLAY_EDGE_LIMIT {
            f.write_str("...")?;
        }
        Ok(())
    }
}

impl<T: Ord + Clone> FromIterator<DirectedEdge<T>> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = DirectedEdge<T>>>(iter: I) -> Self {
        Self::of_edges(iter)
    }
}

impl<T: Serialize> Serialize for DirectedGraph<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.edges.iter())
    }
}

impl<'de, T> Deserialize<'de> for DirectedGraph<T>
where
    T: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let edges = Vec::<DirectedEdge<T>>::deserialize(deserializer)?;
        Ok(Self::of_edges(edges))
    }
}
