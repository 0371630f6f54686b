//! Error types for graph construction.

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building graph values.
///
/// Arguments that the graph types require can never be absent: every
/// constructor takes its inputs by value, so a missing vertex, edge or path is
/// rejected at compile time and serialized input with missing fields fails
/// inside the deserializer. The only failure left at runtime is a cycle.
///
/// # Examples
///
/// ```rust
/// use acyclic::{DirectedAcyclicGraph, DirectedGraph, GraphError};
///
/// let graph: DirectedGraph<&str> = DirectedGraph::from_paths([vec!["A", "B", "C", "A"]]);
///
/// match DirectedAcyclicGraph::of(graph) {
///     Ok(_) => unreachable!("A -> B -> C -> A is a cycle"),
///     Err(GraphError::CycleDetected { remaining_edges }) => assert_eq!(remaining_edges, 3),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No topological order exists.
    ///
    /// `remaining_edges` counts the edges Kahn's algorithm could not drain;
    /// each of them lies on, or downstream of, a cycle.
    #[error("graph contains a cycle: {remaining_edges} edge(s) could not be ordered")]
    CycleDetected {
        /// Edges left in the working set when the ready queue ran dry.
        remaining_edges: usize,
    },
}
