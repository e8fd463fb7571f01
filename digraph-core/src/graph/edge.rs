//! Graph Edges
//!
//! This module defines the capability an edge type must provide to be stored
//! in a [`Digraph`](super::Digraph), plus a plain value edge for callers that
//! do not need their own.

use serde::{Deserialize, Serialize};

use crate::error::{DigraphError, Result};

/// A directed connection from an origin node to a destination node.
///
/// The graph only ever reads the two endpoints; it never builds edges
/// itself. Returning `None` from either accessor marks the edge as
/// malformed, and every operation that receives such an edge rejects it
/// before touching the graph.
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::Edge;
///
/// struct Road {
///     from: &'static str,
///     to: &'static str,
///     km: u32,
/// }
///
/// impl Edge for Road {
///     type Node = &'static str;
///
///     fn origin(&self) -> Option<&Self::Node> {
///         Some(&self.from)
///     }
///
///     fn destination(&self) -> Option<&Self::Node> {
///         Some(&self.to)
///     }
/// }
///
/// let road = Road { from: "Oslo", to: "Bergen", km: 463 };
/// assert_eq!(road.endpoints().unwrap(), (&"Oslo", &"Bergen"));
/// # let _ = road.km;
/// ```
pub trait Edge {
    /// The node type this edge connects.
    type Node;

    /// The node this edge starts from.
    fn origin(&self) -> Option<&Self::Node>;

    /// The node this edge ends at.
    fn destination(&self) -> Option<&Self::Node>;

    /// Both endpoints, or the error describing which one is missing.
    ///
    /// The origin is checked first.
    fn endpoints(&self) -> Result<(&Self::Node, &Self::Node)> {
        let origin = self.origin().ok_or(DigraphError::MissingOrigin)?;
        let destination = self.destination().ok_or(DigraphError::MissingDestination)?;
        Ok((origin, destination))
    }
}

impl<E: Edge + ?Sized> Edge for &E {
    type Node = E::Node;

    fn origin(&self) -> Option<&Self::Node> {
        (**self).origin()
    }

    fn destination(&self) -> Option<&Self::Node> {
        (**self).destination()
    }
}

impl<E: Edge + ?Sized> Edge for Box<E> {
    type Node = E::Node;

    fn origin(&self) -> Option<&Self::Node> {
        (**self).origin()
    }

    fn destination(&self) -> Option<&Self::Node> {
        (**self).destination()
    }
}

/// An edge that is nothing but its two endpoints.
///
/// Two `SimpleEdge`s are equal when both endpoints are equal, so removing one
/// from a graph removes the first stored edge with the same origin and
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimpleEdge<N> {
    /// Where the edge starts.
    pub origin: N,

    /// Where the edge ends.
    pub destination: N,
}

impl<N> SimpleEdge<N> {
    /// Create an edge from `origin` to `destination`.
    pub fn new(origin: N, destination: N) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The same connection pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            origin: self.destination,
            destination: self.origin,
        }
    }

    /// Whether the edge starts and ends at the same node.
    pub fn is_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.origin == self.destination
    }
}

impl<N> Edge for SimpleEdge<N> {
    type Node = N;

    fn origin(&self) -> Option<&N> {
        Some(&self.origin)
    }

    fn destination(&self) -> Option<&N> {
        Some(&self.destination)
    }
}

impl<N> From<(N, N)> for SimpleEdge<N> {
    fn from((origin, destination): (N, N)) -> Self {
        Self::new(origin, destination)
    }
}
