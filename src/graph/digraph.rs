//! Graph: arena-backed directed multigraph

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;

use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId, NodeKey};
use crate::config::GraphConfig;
use crate::error::GraphResult;

/// A directed, weighted multigraph over keys of type `T`
///
/// The graph owns every node and edge; callers hold [`NodeId`] and
/// [`EdgeId`] handles. Nodes are never removed from the arena. Re-adding a
/// key allocates a fresh node and retires the previous one: the key now
/// resolves to the new node, while edges already attached to the retired
/// node stay in the edge list.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
    index: HashMap<T, NodeId>,
    edges: Vec<Edge>,
}

impl<T: NodeKey> Graph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Create an empty graph pre-sized from `config`
    pub fn with_config(config: &GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            nodes: Vec::with_capacity(config.node_capacity),
            index: HashMap::with_capacity(config.node_capacity),
            edges: Vec::with_capacity(config.edge_capacity),
        })
    }

    /// Add a node for `key`, replacing any node already registered under it
    pub fn add_node(&mut self, key: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, key.clone()));
        if let Some(previous) = self.index.insert(key, id) {
            trace!(retired = %previous, node = %id, "node key re-added");
        }
        id
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Handles are not validated. A handle that names no node in this graph
    /// gets no degree or adjacency bookkeeping, but the edge is still kept.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> EdgeId {
        let id = EdgeId(self.edges.len());
        if let Some(node) = self.nodes.get_mut(from.0) {
            node.attach_outgoing(id, to);
        }
        if let Some(node) = self.nodes.get_mut(to.0) {
            node.attach_incoming();
        }
        self.edges.push(Edge::new(id, from, to, weight));
        id
    }

    /// Get a node by handle, including retired nodes
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Get an edge by handle
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Resolve a key to its current node
    pub fn node_id(&self, key: &T) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Key of the node behind a handle
    pub fn key(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::key)
    }

    /// Whether `id` is the node its key currently resolves to
    pub fn is_live(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|node| self.index.get(node.key()) == Some(&id))
    }

    /// All live nodes, in insertion order.
    ///
    /// Retired nodes are skipped, so after a key is re-added the out-degree
    /// sum over this iterator can fall short of
    /// [`edge_count`](Self::edge_count). Use [`all_nodes`](Self::all_nodes)
    /// to check degree totals.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.iter().filter(|node| self.is_live(node.id()))
    }

    /// Every node in the arena, retired ones included, in insertion order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.iter()
    }

    /// Handles of all live nodes, in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(Node::id)
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges whose endpoints are both live, in insertion order
    pub fn live_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .filter(|edge| self.is_live(edge.from()) && self.is_live(edge.to()))
    }

    /// Outgoing edges of a node; empty for an unknown handle
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.node(id)
            .map(Node::edges)
            .unwrap_or_default()
            .iter()
            .filter_map(|edge| self.edge(*edge))
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<T: NodeKey> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NodeKey + Serialize> Serialize for Graph<T> {
    /// Serializes the live subgraph: live nodes and the edges between them,
    /// with degrees and adjacency counted over those edges only.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let edges: Vec<&Edge> = self.live_edges().collect();
        let mut in_degree: HashMap<NodeId, usize> = HashMap::new();
        for edge in &edges {
            *in_degree.entry(edge.to()).or_default() += 1;
        }

        let nodes: Vec<LiveNode<'_, T>> = self
            .nodes()
            .map(|node| {
                let outgoing: Vec<&Edge> = self
                    .outgoing(node.id())
                    .filter(|edge| self.is_live(edge.to()))
                    .collect();
                LiveNode {
                    id: node.id(),
                    key: node.key(),
                    in_degree: in_degree.get(&node.id()).copied().unwrap_or(0),
                    out_degree: outgoing.len(),
                    neighbors: outgoing.iter().map(|edge| edge.to()).collect(),
                    edges: outgoing.iter().map(|edge| edge.id()).collect(),
                }
            })
            .collect();

        let mut state = serializer.serialize_struct("Graph", 2)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}

#[derive(Serialize)]
struct LiveNode<'a, T> {
    id: NodeId,
    key: &'a T,
    in_degree: usize,
    out_degree: usize,
    neighbors: Vec<NodeId>,
    edges: Vec<EdgeId>,
}
