use crate::node::{Node, NodeId};
use ahash::AHashMap;
use std::collections::VecDeque;

/// Owns every node of one flow, keyed by id, together with the FIFO
/// execution queue.
///
/// Execution order is exactly registration order; the graph performs no
/// dependency validation at registration time. A dependency on an id that
/// was never registered surfaces as a per-node evaluation error, not a
/// structural one.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: AHashMap<NodeId, Node>,
    /// Registration order, kept for deterministic read APIs.
    order: Vec<NodeId>,
    /// Ids not yet evaluated. Drained exactly once per run.
    queue: VecDeque<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the node if its id is new and appends it to the execution
    /// queue. Re-registering an existing id is a no-op: first registration
    /// wins. Returns whether the node was inserted.
    pub fn register(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.order.push(node.id);
        self.queue.push_back(node.id);
        self.nodes.insert(node.id, node);
        true
    }

    /// Pops the next id off the execution queue.
    pub(crate) fn pop_next(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All registered nodes satisfying the predicate, in registration
    /// order. Used by builders to offer eligible dependency candidates.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Node>
    where
        P: Fn(&Node) -> bool,
    {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| predicate(node))
            .collect()
    }

    /// All registered nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Ids still waiting in the execution queue, front first.
    pub fn queued(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.iter().copied()
    }

    /// Clears all nodes and the queue, ready for a fresh build.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
