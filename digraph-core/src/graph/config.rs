//! Store Configuration
//!
//! Sizing hints applied when a [`Digraph`](super::Digraph) is created. None
//! of them change behavior, only how much memory is reserved up front.

use serde::{Deserialize, Serialize};

/// Capacity hints for a new graph.
///
/// Deserializes from a partial document: missing fields fall back to
/// [`Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigraphConfig {
    /// Number of nodes to reserve room for.
    pub node_capacity: usize,

    /// Number of outgoing edges to reserve for each node as it is first
    /// materialised. Values up to the inline capacity of four never allocate.
    pub edge_capacity: usize,
}

impl DigraphConfig {
    /// Create a configuration with no reservations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `nodes` nodes.
    pub fn with_node_capacity(mut self, nodes: usize) -> Self {
        self.node_capacity = nodes;
        self
    }

    /// Reserve room for `edges` outgoing edges per node.
    pub fn with_edge_capacity(mut self, edges: usize) -> Self {
        self.edge_capacity = edges;
        self
    }
}
