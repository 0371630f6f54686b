//! Directed edges.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::VertexId;

/// An ordered pair of vertices, `from -> to`.
///
/// Two edges are equal exactly when both endpoints are equal, so parallel
/// edges between the same ordered pair collapse inside a graph's edge set.
/// Edges order lexicographically by `(from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DirectedEdge<T> {
    from: VertexId<T>,
    to: VertexId<T>,
}

impl<T> DirectedEdge<T> {
    /// Creates the edge `from -> to`.
    #[inline]
    pub const fn between_vertices(from: VertexId<T>, to: VertexId<T>) -> Self {
        Self { from, to }
    }

    /// Tail of the edge.
    #[inline]
    pub const fn from(&self) -> &VertexId<T> {
        &self.from
    }

    /// Head of the edge.
    #[inline]
    pub const fn to(&self) -> &VertexId<T> {
        &self.to
    }

    /// Splits the edge into `(from, to)`.
    #[inline]
    pub fn into_vertices(self) -> (VertexId<T>, VertexId<T>) {
        (self.from, self.to)
    }
}

impl<T: PartialEq> DirectedEdge<T> {
    /// Whether the edge starts and ends at the same vertex.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<T> From<(T, T)> for DirectedEdge<T> {
    fn from((from, to): (T, T)) -> Self {
        Self::between_vertices(VertexId::from_id(from), VertexId::from_id(to))
    }
}

impl<T: fmt::Display> fmt::Display for DirectedEdge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from.id(), self.to.id())
    }
}
