//! # `acyclic` - Immutable Directed Graphs
//!
//! Value-oriented directed graphs with acyclicity verification, deterministic
//! topological ordering and longest-path queries. Intended for algorithms that
//! order work by dependency: build graphs, scheduling precedence, critical-path
//! analysis.
//!
//! ## Guarantees
//!
//! ### Value Semantics
//! - **Immutable values**: adding or removing an edge returns a new graph; the
//!   receiver is never mutated, so graphs can be shared freely across threads.
//! - **Structural identity**: a graph is its edge set. Parallel edges collapse
//!   and vertices without edges are not represented.
//! - **Cheap copies**: the edge set is reference counted and only copied when a
//!   shared graph is written to.
//!
//! ### Acyclicity
//! - **Single gate**: [`DirectedAcyclicGraph::of`] is the only constructor and
//!   fails with [`GraphError::CycleDetected`] for cyclic input. Deserialization
//!   goes through the same gate.
//! - **Deterministic order**: Kahn's algorithm takes the smallest ready vertex
//!   first, so the same edge set always yields the same order.
//! - **Order-independent identity**: DAG equality only looks at the edges.
//!
//! ## Architecture
//!
//! Components, leaf-first:
//!
//! 1. [`VertexId`]: opaque wrapper around a comparable id
//! 2. [`DirectedEdge`]: ordered `(from, to)` pair
//! 3. [`DirectedGraph`]: persistent set of edges
//! 4. [`DirectedAcyclicGraph`]: a graph plus its topological order
//! 5. [`longest_path`], [`critical_path`],
//!    [`compute_maximum_path_lengths_to_each_node`]: DP over that order
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from DAG construction
//! - `proptest`: export graph strategies in [`strategy`]
//!
//! ## Example
//!
//! ```rust
//! use acyclic::{longest_path, DirectedAcyclicGraph, DirectedGraph, GraphError, VertexId};
//!
//! //          B - C
//! //         /     \
//! // A ---- D ----- E
//! //         \
//! //          F
//! let graph: DirectedGraph<&str> = DirectedGraph::from_paths([
//!     vec!["A", "B", "C", "E"],
//!     vec!["A", "D", "E"],
//!     vec!["D", "F"],
//! ]);
//!
//! let dag = DirectedAcyclicGraph::of(graph.clone())?;
//! let path = longest_path(&dag, &VertexId::from_id("A")).expect("A is a vertex");
//! assert_eq!(path.len(), 4);
//!
//! // Closing the loop E -> A makes the graph cyclic.
//! let cyclic = graph.add_edge_between(VertexId::from_id("E"), VertexId::from_id("A"));
//! assert!(matches!(
//!     DirectedAcyclicGraph::of(cyclic),
//!     Err(GraphError::CycleDetected { .. })
//! ));
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::{GraphError, Result};
pub use graph::{
    compute_maximum_path_lengths_to_each_node, critical_path, longest_path, DirectedAcyclicGraph,
    DirectedEdge, DirectedGraph, VertexId,
};

// Graph values are shared without synchronization; keep them thread-safe.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<VertexId<u64>>();
    assert_send_sync::<DirectedEdge<u64>>();
    assert_send_sync::<DirectedGraph<u64>>();
    assert_send_sync::<DirectedAcyclicGraph<u64>>();
};
