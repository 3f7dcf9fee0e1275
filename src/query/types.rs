//! Query types and result structures

use std::collections::HashMap;

use crate::graph::{Edge, EdgeId, NodeId};

/// Distance reported for unreachable pairs by the `*_or_infinity` accessors
pub const INFINITY: i64 = i64::MAX;

/// Order in which a traversal discovers nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Level by level, queue driven
    #[default]
    BreadthFirst,
    /// Pre-order, stack driven
    DepthFirst,
}

/// Result of a traversal query
#[derive(Debug, Clone)]
pub struct TraversalResult<T> {
    /// Starting node
    pub origin: NodeId,
    /// How the graph was walked
    pub order: TraversalOrder,
    /// Keys in discovery order
    pub keys: Vec<T>,
    /// Node handles in discovery order, parallel to `keys`
    pub visited: Vec<NodeId>,
}

impl<T> TraversalResult<T> {
    pub fn new(origin: NodeId, order: TraversalOrder) -> Self {
        Self {
            origin,
            order,
            keys: Vec::new(),
            visited: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, id: NodeId, key: T) {
        self.visited.push(id);
        self.keys.push(key);
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }
}

/// Edges accepted by a spanning tree construction
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    /// Accepted edges, in acceptance order
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn accept(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|edge| edge.id() == id)
    }

    /// Sum of accepted edge weights
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Single-source shortest distances
///
/// A node missing from the map is unreachable from the source.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: NodeId,
    distances: HashMap<NodeId, i64>,
}

impl DistanceMap {
    pub(crate) fn new(source: NodeId, distances: HashMap<NodeId, i64>) -> Self {
        Self { source, distances }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `target`, `None` if unreachable
    pub fn get(&self, target: NodeId) -> Option<i64> {
        self.distances.get(&target).copied()
    }

    pub fn contains(&self, target: NodeId) -> bool {
        self.distances.contains_key(&target)
    }

    /// Number of reached nodes, the source included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Every `(node, distance)` pair, in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, i64)> + '_ {
        self.distances.iter().map(|(id, d)| (*id, *d))
    }

    pub fn into_inner(self) -> HashMap<NodeId, i64> {
        self.distances
    }
}

/// All-pairs shortest distances over a fixed node order
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    nodes: Vec<NodeId>,
    position: HashMap<NodeId, usize>,
    cells: Vec<Option<i64>>,
}

impl DistanceMatrix {
    pub(crate) fn new(nodes: Vec<NodeId>, cells: Vec<Option<i64>>) -> Self {
        let position = nodes.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        Self {
            nodes,
            position,
            cells,
        }
    }

    /// Nodes covered by the matrix, in row order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Shortest distance `from -> to`; `None` if unreachable or either node
    /// is not covered
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<i64> {
        let i = *self.position.get(&from)?;
        let j = *self.position.get(&to)?;
        self.cells[i * self.nodes.len() + j]
    }

    /// Like [`distance`](Self::distance), reporting unreachable as [`INFINITY`]
    pub fn distance_or_infinity(&self, from: NodeId, to: NodeId) -> i64 {
        self.distance(from, to).unwrap_or(INFINITY)
    }

    /// Every `(target, distance)` pair for one source row
    pub fn row(&self, from: NodeId) -> Option<impl Iterator<Item = (NodeId, Option<i64>)> + '_> {
        let i = *self.position.get(&from)?;
        let n = self.nodes.len();
        Some(
            self.nodes
                .iter()
                .zip(&self.cells[i * n..(i + 1) * n])
                .map(|(id, d)| (*id, *d)),
        )
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
