//! Tests for the graph store and its FIFO scheduling guarantees.
use nagare::prelude::*;

#[test]
fn test_execution_order_is_registration_order() {
    let mut graph = Graph::new();
    graph.register(Node::number_input(3, "a"));
    graph.register(Node::number_input(1, "b"));
    graph.register(Node::number_input(2, "c"));

    let queued: Vec<NodeId> = graph.queued().collect();
    assert_eq!(queued, vec![3, 1, 2]);
}

#[test]
fn test_first_registration_wins() {
    let mut graph = Graph::new();
    assert!(graph.register(Node::number_input(1, "first")));
    assert!(!graph.register(Node::text_input(1, "imposter")));

    assert_eq!(graph.len(), 1);
    let node = graph.get(1).unwrap();
    assert_eq!(node.kind_name(), "NumberInput");

    // The duplicate must not be queued a second time either.
    assert_eq!(graph.queued().count(), 1);
}

#[test]
fn test_reset_clears_nodes_and_queue() {
    let mut graph = Graph::new();
    graph.register(Node::number_input(1, "a"));
    graph.register(Node::float_calc(2, Op::Add, vec![1]));
    assert!(!graph.is_empty());

    graph.reset();
    assert!(graph.is_empty());
    assert_eq!(graph.queued().count(), 0);
    assert!(graph.get(1).is_none());
}

#[test]
fn test_filter_returns_matches_in_registration_order() {
    let mut graph = Graph::new();
    graph.register(Node::number_input(5, "a"));
    graph.register(Node::text_input(2, "b"));
    graph.register(Node::float_calc(9, Op::Add, vec![5]));
    graph.register(Node::new(4, NodeKind::End));

    // The predicate a builder would use to offer float-calculus candidates.
    let eligible = graph.filter(|node| node.number_value().is_some());
    let ids: Vec<NodeId> = eligible.iter().map(|node| node.id).collect();
    assert_eq!(ids, vec![5, 9]);
}

#[test]
fn test_registration_does_not_validate_dependencies() {
    let mut graph = Graph::new();
    // Forward and dangling references are accepted; they only fail at
    // evaluation time.
    assert!(graph.register(Node::float_calc(1, Op::Add, vec![2, 99])));
    assert!(graph.contains(1));
}
