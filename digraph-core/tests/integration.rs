//! Integration Tests for the Digraph Store
//!
//! These tests drive the public API the way a construction or algorithm
//! collaborator would, with both value nodes and identity-keyed nodes.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use digraph_core::graph::{Digraph, Edge, SimpleEdge};
use digraph_core::DigraphError;

/// Test the single-edge scenario on an empty graph.
#[test]
fn first_edge_creates_both_nodes() {
    let mut graph: Digraph<&str> = Digraph::new();

    graph.add_edge(SimpleEdge::new("A", "B")).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains_edge(&"A", &"B"));
    assert!(!graph.contains_edge(&"B", &"A"));
}

/// Test that removing a hub keeps its targets but drops every edge.
#[test]
fn removing_hub_keeps_leaves() {
    let mut graph: Digraph<&str> = Digraph::try_from_edges([
        SimpleEdge::new("A", "B"),
        SimpleEdge::new("A", "C"),
        SimpleEdge::new("A", "D"),
    ])
    .unwrap();

    graph.try_remove_node(&"A");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    for leaf in ["B", "C", "D"] {
        assert!(graph.contains_node(&leaf));
    }
}

/// Test that equal value edges are stored twice and removed one at a time.
#[test]
fn equal_edges_are_parallel() {
    let mut graph: Digraph<&str> = Digraph::new();
    graph.add_edge(SimpleEdge::new("A", "B")).unwrap();
    graph.add_edge(SimpleEdge::new("A", "B")).unwrap();

    assert_eq!(graph.outgoing_edges(&"A").count(), 2);

    let removed = graph.try_remove_edge(&SimpleEdge::new("A", "B")).unwrap();
    assert_eq!(removed, Some(SimpleEdge::new("A", "B")));
    assert_eq!(graph.outgoing_edges(&"A").count(), 1);
    assert!(graph.contains_edge(&"A", &"B"));
}

/// Test outgoing edges come back in insertion order.
#[test]
fn outgoing_edges_preserve_order() {
    let edges = [
        SimpleEdge::new(0, 3),
        SimpleEdge::new(0, 1),
        SimpleEdge::new(0, 2),
    ];
    let graph: Digraph<i32> = Digraph::try_from_edges(edges).unwrap();

    let stored: Vec<_> = graph.outgoing_edges(&0).copied().collect();
    assert_eq!(stored, edges);
}

/// Test that building from a sequence stops at the first malformed edge.
#[test]
fn building_stops_at_malformed_edge() {
    #[derive(Debug, Clone, PartialEq)]
    struct Maybe(Option<i32>, Option<i32>);

    impl Edge for Maybe {
        type Node = i32;

        fn origin(&self) -> Option<&i32> {
            self.0.as_ref()
        }

        fn destination(&self) -> Option<&i32> {
            self.1.as_ref()
        }
    }

    let result = Digraph::try_from_edges([Maybe(Some(1), Some(2)), Maybe(Some(2), None)]);
    assert_eq!(result.unwrap_err(), DigraphError::MissingDestination);

    let mut graph: Digraph<i32, Maybe> = Digraph::new();
    let error = graph
        .extend_edges([
            Maybe(Some(1), Some(2)),
            Maybe(None, Some(3)),
            Maybe(Some(3), Some(4)),
        ])
        .unwrap_err();

    assert_eq!(error, DigraphError::MissingOrigin);
    assert!(error.is_invalid_argument());
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains_node(&3));
}

/// A node compared by the address of its allocation, not its contents.
#[derive(Debug, Clone)]
struct ByRef(Rc<Station>);

#[derive(Debug)]
struct Station {
    name: &'static str,
}

impl ByRef {
    fn new(name: &'static str) -> Self {
        Self(Rc::new(Station { name }))
    }
}

impl PartialEq for ByRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ByRef {}

impl Hash for ByRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

/// Edge between identity nodes, equal only to itself.
#[derive(Debug)]
struct Track {
    from: ByRef,
    to: ByRef,
}

impl Edge for Track {
    type Node = ByRef;

    fn origin(&self) -> Option<&ByRef> {
        Some(&self.from)
    }

    fn destination(&self) -> Option<&ByRef> {
        Some(&self.to)
    }
}

/// Test that nodes with equal contents stay distinct when keyed by identity.
#[test]
fn identity_nodes_with_same_name_are_distinct() {
    let first = ByRef::new("Central");
    let second = ByRef::new("Central");
    let mut graph: Digraph<ByRef, Track> = Digraph::new();

    graph.add_node(first.clone());
    graph.add_node(second.clone());
    graph.add_node(first.clone());

    assert_eq!(graph.node_count(), 2);
    assert!(graph.nodes().all(|node| node.0.name == "Central"));
}

/// Test cascade removal with identity nodes and borrowed edges.
#[test]
fn borrowed_edges_between_identity_nodes() {
    let north = ByRef::new("North");
    let south = ByRef::new("South");
    let east = ByRef::new("East");

    let tracks = [
        Track {
            from: north.clone(),
            to: south.clone(),
        },
        Track {
            from: east.clone(),
            to: south.clone(),
        },
        Track {
            from: south.clone(),
            to: east.clone(),
        },
    ];

    let mut graph: Digraph<ByRef, &Track> = Digraph::try_from_edges(&tracks).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains_edge(&north, &south));

    assert!(graph.try_remove_node(&south));

    assert!(!graph.contains_node(&south));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.outgoing_edges(&north).count(), 0);
    assert_eq!(graph.outgoing_edges(&east).count(), 0);
}

/// Test that boxed trait-object edges can share one graph.
#[test]
fn boxed_edges_of_mixed_types() {
    #[allow(dead_code)]
    struct Weighted {
        from: u8,
        to: u8,
        weight: f32,
    }

    impl Edge for Weighted {
        type Node = u8;

        fn origin(&self) -> Option<&u8> {
            Some(&self.from)
        }

        fn destination(&self) -> Option<&u8> {
            Some(&self.to)
        }
    }

    let mut graph: Digraph<u8, Box<dyn Edge<Node = u8>>> = Digraph::new();
    graph.add_edge(Box::new(SimpleEdge::new(1u8, 2u8))).unwrap();
    graph
        .add_edge(Box::new(Weighted {
            from: 2,
            to: 3,
            weight: 0.5,
        }))
        .unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.successors(&2).copied().collect::<Vec<_>>(), vec![3]);
}

/// Test that a graph can be configured from JSON.
#[test]
fn graph_from_json_config() {
    let config = serde_json::from_str(r#"{"node_capacity": 128, "edge_capacity": 2}"#).unwrap();
    let mut graph: Digraph<u64> = Digraph::with_config(config);

    graph.add_edge(SimpleEdge::new(1, 2)).unwrap();

    assert_eq!(graph.config().node_capacity, 128);
    assert_eq!(graph.config().edge_capacity, 2);
    assert!(graph.contains_edge(&1, &2));
}
