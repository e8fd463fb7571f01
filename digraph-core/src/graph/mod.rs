//! Directed Graph Storage
//!
//! This module implements a mutable directed graph kept as adjacency lists.
//!
//! # Overview
//!
//! The graph maps every node to the ordered list of edges leaving it:
//!
//! - Nodes are caller-supplied keys (anything hashable and comparable)
//! - Edges are caller-supplied values implementing [`Edge`]
//!
//! The store only records and forgets associations. Traversal, path finding
//! and other algorithms are expected to live on top of its read API
//! ([`Digraph::nodes`], [`Digraph::outgoing_edges`], [`Digraph::contains_node`],
//! [`Digraph::contains_edge`]).
//!
//! # Design Decisions
//!
//! 1. Inserting an edge upserts both endpoints, so stored edges never
//!    reference a node the graph does not know about.
//!
//! 2. Only forward lists are kept. Removing a node walks every list to drop
//!    edges pointing at it, trading O(E) removal for a single source of truth.
//!
//! 3. The node map preserves insertion order, so iteration is deterministic.
//!
//! 4. Nothing here is synchronized. Wrap the whole graph in a lock if it has
//!    to be shared between threads.

mod config;
mod digraph;
mod edge;

pub use config::DigraphConfig;
pub use digraph::{Digraph, Nodes, OutgoingEdges};
pub use edge::{Edge, SimpleEdge};
