//! Graph traversal operations

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

use super::types::{TraversalOrder, TraversalResult};
use crate::collections::{Fifo, Lifo};
use crate::graph::{Graph, Node, NodeId, NodeKey};

/// Query for walking the graph from a starting node
#[derive(Debug, Clone)]
pub struct TraverseQuery {
    /// Starting node ID
    pub origin: NodeId,
    /// Discovery order
    pub order: TraversalOrder,
}

impl TraverseQuery {
    /// Breadth-first walk from `origin`
    pub fn breadth_first(origin: NodeId) -> Self {
        Self {
            origin,
            order: TraversalOrder::BreadthFirst,
        }
    }

    /// Depth-first (pre-order) walk from `origin`
    pub fn depth_first(origin: NodeId) -> Self {
        Self {
            origin,
            order: TraversalOrder::DepthFirst,
        }
    }

    /// Execute the traversal against a graph.
    ///
    /// Only nodes reachable from the origin are visited, each exactly once.
    /// An origin that names no node yields an empty result.
    pub fn execute<T: NodeKey>(&self, graph: &Graph<T>) -> TraversalResult<T> {
        let result = match self.order {
            TraversalOrder::BreadthFirst => self.breadth_first_walk(graph),
            TraversalOrder::DepthFirst => self.depth_first_walk(graph),
        };
        debug!(
            order = ?self.order,
            origin = %self.origin,
            visited = result.len(),
            "traversal complete"
        );
        result
    }

    fn breadth_first_walk<T: NodeKey>(&self, graph: &Graph<T>) -> TraversalResult<T> {
        let mut result = TraversalResult::new(self.origin, self.order);
        if graph.node(self.origin).is_none() {
            return result;
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        queue.enqueue(self.origin);
        visited.insert(self.origin);

        while let Some(current) = queue.dequeue() {
            let Some(node) = graph.node(current) else {
                continue;
            };
            result.record(current, node.key().clone());

            for &next in node.neighbors() {
                if visited.insert(next) {
                    queue.enqueue(next);
                }
            }
        }

        result
    }

    /// Each stack frame is a node plus the adjacency position to resume
    /// scanning from. Everything before the cursor was already visited, so
    /// resuming there matches a rescan from the start.
    fn depth_first_walk<T: NodeKey>(&self, graph: &Graph<T>) -> TraversalResult<T> {
        let mut result = TraversalResult::new(self.origin, self.order);
        let Some(origin) = graph.node(self.origin) else {
            return result;
        };

        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        visited.insert(self.origin);
        result.record(self.origin, origin.key().clone());
        Lifo::push(&mut stack, (self.origin, 0));

        while let Some((current, cursor)) = Lifo::pop(&mut stack) {
            let neighbors = graph.node(current).map(Node::neighbors).unwrap_or_default();
            let Some(offset) = neighbors[cursor..].iter().position(|n| !visited.contains(n)) else {
                continue;
            };

            let position = cursor + offset;
            let next = neighbors[position];
            Lifo::push(&mut stack, (current, position + 1));
            visited.insert(next);
            if let Some(node) = graph.node(next) {
                result.record(next, node.key().clone());
            }
            Lifo::push(&mut stack, (next, 0));
        }

        result
    }
}

impl<T: NodeKey> Graph<T> {
    /// Keys reachable from `start`, in breadth-first discovery order
    pub fn bfs(&self, start: NodeId) -> Vec<T> {
        TraverseQuery::breadth_first(start).execute(self).keys
    }

    /// Keys reachable from `start`, in depth-first pre-order
    pub fn dfs(&self, start: NodeId) -> Vec<T> {
        TraverseQuery::depth_first(start).execute(self).keys
    }

    /// Kahn topological ordering of the live nodes.
    ///
    /// On a DAG every node appears, after all of its predecessors. If the
    /// graph has a cycle the nodes on or behind it never reach in-degree
    /// zero, so the result is shorter than [`node_count`](Self::node_count);
    /// callers compare lengths to detect that.
    ///
    /// In-degrees count only edges between live nodes, so edges left on a
    /// retired node do not hold back their targets.
    pub fn topology(&self) -> Vec<NodeId> {
        let mut remaining: HashMap<NodeId, usize> =
            self.node_ids().map(|id| (id, 0)).collect();
        for edge in self.edges() {
            if !remaining.contains_key(&edge.from()) {
                continue;
            }
            if let Some(count) = remaining.get_mut(&edge.to()) {
                *count += 1;
            }
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        for id in self.node_ids() {
            if remaining.get(&id) == Some(&0) {
                queue.enqueue(id);
            }
        }

        let mut order = Vec::with_capacity(remaining.len());
        while let Some(current) = queue.dequeue() {
            order.push(current);
            let Some(node) = self.node(current) else {
                continue;
            };
            for next in node.neighbors() {
                if let Some(count) = remaining.get_mut(next) {
                    *count -= 1;
                    if *count == 0 {
                        queue.enqueue(*next);
                    }
                }
            }
        }

        debug!(
            nodes = self.node_count(),
            ordered = order.len(),
            "topological sort complete"
        );
        order
    }
}
