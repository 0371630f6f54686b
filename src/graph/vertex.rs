//! Vertex identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a vertex.
///
/// A vertex has no state of its own; it is known only through the edges that
/// reference it. Equality, ordering and hashing all delegate to the wrapped id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId<T> {
    id: T,
}

impl<T> VertexId<T> {
    /// Wraps `id` as a vertex identifier.
    #[inline]
    pub const fn from_id(id: T) -> Self {
        Self { id }
    }

    /// Returns the wrapped id.
    #[inline]
    pub const fn id(&self) -> &T {
        &self.id
    }

    /// Unwraps the identifier.
    #[inline]
    pub fn into_id(self) -> T {
        self.id
    }
}

impl<T> From<T> for VertexId<T> {
    #[inline]
    fn from(id: T) -> Self {
        Self::from_id(id)
    }
}

impl<T: fmt::Display> fmt::Display for VertexId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex: {}", self.id)
    }
}
