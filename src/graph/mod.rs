//! Immutable directed graphs and DAG algorithms.
//!
//! Graph values are organized leaf-first:
//! - `vertex`: opaque vertex identifiers
//! - `edge`: ordered vertex pairs
//! - `directed`: edge sets with value semantics
//! - `dag`: acyclic graphs with a topological order and path queries

pub mod dag;
pub mod directed;
pub mod edge;
pub mod vertex;

pub use dag::longest_path::{compute_maximum_path_lengths_to_each_node, critical_path, longest_path};
pub use dag::DirectedAcyclicGraph;
pub use directed::DirectedGraph;
pub use edge::DirectedEdge;
pub use vertex::VertexId;
