//! Node representation in the graph

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::edge::EdgeId;

/// Bounds a type must meet to key graph nodes
pub trait NodeKey: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> NodeKey for T {}

/// Handle to a node, valid for the graph that minted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node in the graph
///
/// `neighbors` and `edges` are parallel: the i-th neighbor is the
/// destination of the i-th outgoing edge, so parallel edges show up as
/// repeated neighbors.
#[derive(Debug, Clone, Serialize)]
pub struct Node<T> {
    id: NodeId,
    key: T,
    in_degree: usize,
    out_degree: usize,
    neighbors: Vec<NodeId>,
    edges: Vec<EdgeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, key: T) -> Self {
        Self {
            id,
            key,
            in_degree: 0,
            out_degree: 0,
            neighbors: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    /// Number of edges pointing at this node
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of edges leaving this node
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Direct successors, in edge insertion order
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Outgoing edges, in insertion order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach_outgoing(&mut self, edge: EdgeId, to: NodeId) {
        self.out_degree += 1;
        self.neighbors.push(to);
        self.edges.push(edge);
    }

    pub(crate) fn attach_incoming(&mut self) {
        self.in_degree += 1;
    }
}
