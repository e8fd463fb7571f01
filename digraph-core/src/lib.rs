//! Digraph Core
//!
//! This crate provides a small, generic directed-graph container. It
//! implements:
//!
//! - Node and edge insertion, with endpoints materialised on demand
//! - Node removal that cascades to every edge pointing at the node
//! - Membership queries and ordered outgoing-edge enumeration
//!
//! It is a storage building block: there are no traversal or analysis
//! algorithms, no persistence format, and no internal locking.
//!
//! # Architecture
//!
//! - `graph`: The adjacency-list store and the edge capability trait
//! - `error`: Errors reported for malformed edges
//!
//! # Example
//!
//! ```rust
//! use digraph_core::graph::{Digraph, SimpleEdge};
//!
//! let mut graph = Digraph::new();
//! graph.add_edge(SimpleEdge::new("a", "b"))?;
//! graph.add_edge(SimpleEdge::new("a", "c"))?;
//!
//! let targets: Vec<_> = graph.successors(&"a").collect();
//! assert_eq!(targets, [&"b", &"c"]);
//!
//! // Removing a node also removes the edges pointing at it.
//! graph.try_remove_node(&"b");
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), digraph_core::DigraphError>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{DigraphError, Result};
pub use graph::{Digraph, DigraphConfig, Edge, SimpleEdge};
