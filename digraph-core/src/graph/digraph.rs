//! Adjacency-List Store
//!
//! The digraph keeps one map from each node to the ordered list of edges that
//! leave it. That map is the only state; everything else is derived from it.
//!
//! # Invariants
//!
//! 1. Every node named as an origin or destination of a stored edge has an
//!    entry in the map, possibly with an empty list.
//! 2. A node's list only holds edges whose origin is that node.
//! 3. The cached edge count equals the sum of all list lengths.
//!
//! # Removal Cost
//!
//! There is no reverse index. Removing a node scans every outgoing list to
//! drop the edges that point at it, so it costs O(total edges). Insertion and
//! edge lookup only touch the origin's list.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice;

use indexmap::map::{Entry, Keys};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::config::DigraphConfig;
use super::edge::{Edge, SimpleEdge};
use crate::error::Result;

/// Outgoing edges of a single node, in insertion order.
type OutgoingList<E> = SmallVec<[E; 4]>;

/// A mutable directed graph stored as adjacency lists.
///
/// # Type Parameters
///
/// - `N`: The node type. Nodes are keys, so they must be hashable and
///   comparable. They are cloned when an edge materialises them.
/// - `E`: The edge type. Anything implementing [`Edge`] with `Node = N`.
///
/// # Ordering
///
/// Nodes are yielded in the order they were first added. Removing a node
/// keeps the relative order of the others.
///
/// # Parallel Edges
///
/// [`add_edge`](Self::add_edge) never deduplicates: adding the same
/// connection twice stores two edges. [`add_edge_unique`](Self::add_edge_unique)
/// skips edges equal to one already stored, and
/// [`try_remove_edge`](Self::try_remove_edge) removes only the first match.
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::{Digraph, SimpleEdge};
///
/// let mut graph: Digraph<char> = Digraph::new();
/// graph.add_edge(SimpleEdge::new('a', 'b')).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.contains_edge(&'a', &'b'));
/// assert!(!graph.contains_edge(&'b', &'a'));
///
/// graph.try_remove_node(&'b');
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Clone)]
pub struct Digraph<N, E = SimpleEdge<N>> {
    /// Every node, mapped to the edges that leave it.
    adjacency: IndexMap<N, OutgoingList<E>>,

    /// Sum of all outgoing list lengths.
    edge_count: usize,

    /// Sizing hints used when materialising nodes.
    config: DigraphConfig,
}

impl<N, E> Digraph<N, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::with_config(DigraphConfig::default())
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self::with_config(DigraphConfig::new().with_node_capacity(nodes))
    }

    /// Create an empty graph sized according to `config`.
    pub fn with_config(config: DigraphConfig) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(config.node_capacity),
            edge_count: 0,
            config,
        }
    }

    /// The configuration this graph was created with.
    pub fn config(&self) -> &DigraphConfig {
        &self.config
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Remove every node and edge, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Iterate over every node, in insertion order.
    pub fn nodes(&self) -> Nodes<'_, N, E> {
        Nodes {
            inner: self.adjacency.keys(),
        }
    }

    /// Iterate over every stored edge, grouped by origin in node order.
    pub fn edges(&self) -> impl Iterator<Item = &E> + Clone + '_ {
        self.adjacency.values().flat_map(|list| list.iter())
    }
}

impl<N, E> Digraph<N, E>
where
    N: Eq + Hash + Clone,
    E: Edge<Node = N>,
{
    /// Build a graph from a sequence of edges.
    ///
    /// Fails on the first malformed edge.
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::new();
        graph.extend_edges(edges)?;
        Ok(graph)
    }

    /// Add every edge from `edges`.
    ///
    /// Stops at the first malformed edge; edges before it stay in the graph.
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Add a node with no outgoing edges.
    ///
    /// Returns `false` and leaves the graph untouched if the node is already
    /// present.
    pub fn add_node(&mut self, node: N) -> bool {
        let edge_capacity = self.config.edge_capacity;
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(OutgoingList::with_capacity(edge_capacity));
                trace!(nodes = self.adjacency.len(), "added node");
                true
            }
        }
    }

    /// Add an edge, materialising its origin and destination as nodes if
    /// they are not already present.
    ///
    /// Fails without modifying the graph if either endpoint is missing.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let (origin, destination) = Self::validate(&edge)?;
        let (origin, destination) = (origin.clone(), destination.clone());

        self.outgoing_mut(origin).push(edge);
        self.edge_count += 1;
        self.add_node(destination);

        trace!(
            nodes = self.adjacency.len(),
            edges = self.edge_count,
            "added edge"
        );
        Ok(())
    }

    /// Add an edge unless an equal one already leaves the same origin.
    ///
    /// Returns `Ok(false)` when the edge was skipped as a duplicate.
    pub fn add_edge_unique(&mut self, edge: E) -> Result<bool>
    where
        E: PartialEq,
    {
        let (origin, _) = Self::validate(&edge)?;
        let duplicate = self
            .adjacency
            .get(origin)
            .is_some_and(|list| list.contains(&edge));
        if duplicate {
            trace!("skipped duplicate edge");
            return Ok(false);
        }

        self.add_edge(edge)?;
        Ok(true)
    }

    /// Remove a node, its outgoing edges, and every edge pointing at it.
    ///
    /// Returns `false` if the node was not in the graph.
    pub fn try_remove_node(&mut self, node: &N) -> bool {
        let Some(outgoing) = self.adjacency.shift_remove(node) else {
            return false;
        };

        let mut incoming = 0;
        for list in self.adjacency.values_mut() {
            let before = list.len();
            list.retain(|edge| edge.destination() != Some(node));
            incoming += before - list.len();
        }

        self.edge_count -= outgoing.len() + incoming;
        debug!(
            outgoing = outgoing.len(),
            incoming,
            edges = self.edge_count,
            "removed node"
        );
        true
    }

    /// Remove the first stored edge equal to `edge` from its origin's list.
    ///
    /// Returns the removed edge, or `None` if nothing matched. Fails only if
    /// `edge` is malformed.
    pub fn try_remove_edge(&mut self, edge: &E) -> Result<Option<E>>
    where
        E: PartialEq,
    {
        let (origin, _) = Self::validate(edge)?;
        let Some(list) = self.adjacency.get_mut(origin) else {
            return Ok(None);
        };
        let Some(position) = list.iter().position(|existing| existing == edge) else {
            return Ok(None);
        };

        let removed = list.remove(position);
        self.edge_count -= 1;
        trace!(edges = self.edge_count, "removed edge");
        Ok(Some(removed))
    }

    /// Remove every edge from `origin` to `destination`.
    ///
    /// Returns how many edges were removed. Both nodes stay in the graph.
    pub fn remove_edges_between(&mut self, origin: &N, destination: &N) -> usize {
        let Some(list) = self.adjacency.get_mut(origin) else {
            return 0;
        };

        let before = list.len();
        list.retain(|edge| edge.destination() != Some(destination));
        let removed = before - list.len();

        self.edge_count -= removed;
        if removed > 0 {
            trace!(removed, edges = self.edge_count, "removed edges between nodes");
        }
        removed
    }

    /// Check if the node is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Check if any edge leads from `origin` to `destination`.
    pub fn contains_edge(&self, origin: &N, destination: &N) -> bool {
        self.adjacency.get(origin).is_some_and(|list| {
            list.iter()
                .any(|edge| edge.destination() == Some(destination))
        })
    }

    /// Iterate over the edges leaving `node`, in the order they were added.
    ///
    /// Yields nothing if the node is not in the graph.
    pub fn outgoing_edges(&self, node: &N) -> OutgoingEdges<'_, E> {
        let edges: &[E] = match self.adjacency.get(node) {
            Some(list) => list.as_slice(),
            None => &[],
        };
        OutgoingEdges {
            inner: edges.iter(),
        }
    }

    /// Iterate over the destinations of the edges leaving `node`.
    ///
    /// A destination appears once per edge, so parallel edges repeat it.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> + Clone + '_ {
        self.outgoing_edges(node).filter_map(E::destination)
    }

    /// Number of edges leaving `node`, or 0 if it is absent.
    pub fn out_degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, |list| list.len())
    }

    /// Get the origin's outgoing list, creating the node if needed.
    fn outgoing_mut(&mut self, origin: N) -> &mut OutgoingList<E> {
        let edge_capacity = self.config.edge_capacity;
        self.adjacency
            .entry(origin)
            .or_insert_with(|| OutgoingList::with_capacity(edge_capacity))
    }

    /// Borrow both endpoints of `edge`, logging malformed edges.
    fn validate(edge: &E) -> Result<(&N, &N)> {
        edge.endpoints().map_err(|err| {
            debug!(%err, "rejected edge");
            err
        })
    }
}

impl<N, E> Default for Digraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> fmt::Debug for Digraph<N, E>
where
    N: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.adjacency
                    .iter()
                    .map(|(node, list)| (node, list.as_slice())),
            )
            .finish()
    }
}

/// Iterator over the nodes of a [`Digraph`], created by [`Digraph::nodes`].
pub struct Nodes<'a, N, E> {
    inner: Keys<'a, N, OutgoingList<E>>,
}

impl<'a, N, E> Iterator for Nodes<'a, N, E> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N, E> DoubleEndedIterator for Nodes<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<N, E> ExactSizeIterator for Nodes<'_, N, E> {}

impl<N, E> FusedIterator for Nodes<'_, N, E> {}

impl<N, E> Clone for Nodes<'_, N, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Iterator over the edges leaving one node, created by
/// [`Digraph::outgoing_edges`].
pub struct OutgoingEdges<'a, E> {
    inner: slice::Iter<'a, E>,
}

impl<'a, E> Iterator for OutgoingEdges<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for OutgoingEdges<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for OutgoingEdges<'_, E> {}

impl<E> FusedIterator for OutgoingEdges<'_, E> {}

impl<E> Clone for OutgoingEdges<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
