//! Minimum spanning tree construction
//!
//! Both algorithms take the edge order from a caller-supplied comparator.
//! Edges that compare equal are taken in heap pop order, which is
//! deterministic for a given graph but is not a strict total order, so
//! equal-weight trees may differ between Kruskal and Prim.

use std::collections::HashSet;
use tracing::{debug, trace};

use super::types::SpanningTree;
use crate::collections::{Comparator, DisjointSet, HeapError, PriorityHeap};
use crate::error::GraphResult;
use crate::graph::{Edge, EdgeId, Graph, NodeId, NodeKey};

/// Spanning tree construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanningAlgorithm {
    Kruskal,
    Prim,
}

/// Query for building a minimum spanning tree
#[derive(Debug, Clone)]
pub struct SpanningTreeQuery<C> {
    /// Construction strategy
    pub algorithm: SpanningAlgorithm,
    /// Edge ordering, smallest first
    pub comparator: C,
    /// Prim start node; the first live node when unset
    pub start: Option<NodeId>,
}

impl<C: Comparator<Edge>> SpanningTreeQuery<C> {
    /// Kruskal over the whole edge set
    pub fn kruskal(comparator: C) -> Self {
        Self {
            algorithm: SpanningAlgorithm::Kruskal,
            comparator,
            start: None,
        }
    }

    /// Prim grown from a single start node
    pub fn prim(comparator: C) -> Self {
        Self {
            algorithm: SpanningAlgorithm::Prim,
            comparator,
            start: None,
        }
    }

    /// Set the node Prim grows from. Ignored by Kruskal.
    pub fn starting_at(mut self, start: NodeId) -> Self {
        self.start = Some(start);
        self
    }

    /// Execute the construction against a graph
    pub fn execute<T: NodeKey>(&self, graph: &Graph<T>) -> GraphResult<SpanningTree> {
        let tree = match self.algorithm {
            SpanningAlgorithm::Kruskal => kruskal(graph, &self.comparator)?,
            SpanningAlgorithm::Prim => {
                let start = self.start.or_else(|| graph.node_ids().next());
                match start {
                    Some(start) => prim(graph, &self.comparator, start)?,
                    None => SpanningTree::new(),
                }
            }
        };
        debug!(
            algorithm = ?self.algorithm,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            accepted = tree.len(),
            total_weight = tree.total_weight(),
            "spanning tree built"
        );
        Ok(tree)
    }
}

impl<T: NodeKey> Graph<T> {
    /// Kruskal minimum spanning forest.
    ///
    /// Connectivity is tracked on keys without regard to direction, so of
    /// `a -> b` and `b -> a` at most one is accepted. Edges touching a
    /// retired node are skipped.
    pub fn kruskal<C: Comparator<Edge>>(&self, comparator: C) -> GraphResult<SpanningTree> {
        SpanningTreeQuery::kruskal(comparator).execute(self)
    }

    /// Prim minimum spanning tree grown from the first live node.
    ///
    /// Only outgoing edges are followed and disconnected components are not
    /// revisited. On a directed graph the result is only a true spanning
    /// tree when every connection is present in both directions.
    pub fn prim<C: Comparator<Edge>>(&self, comparator: C) -> GraphResult<SpanningTree> {
        SpanningTreeQuery::prim(comparator).execute(self)
    }
}

fn kruskal<T: NodeKey, C: Comparator<Edge>>(graph: &Graph<T>, cmp: &C) -> GraphResult<SpanningTree> {
    let mut sets = DisjointSet::new(graph.nodes().map(|node| node.key().clone()));

    // Capacity equals the edge count, so pushing every edge never fails.
    let mut heap = PriorityHeap::with_capacity(graph.edge_count(), cmp);
    for edge in graph.edges() {
        heap.push(*edge)?;
    }

    let mut tree = SpanningTree::new();
    while let Some(edge) = heap.pop() {
        if !graph.is_live(edge.from()) || !graph.is_live(edge.to()) {
            continue;
        }
        let (Some(from), Some(to)) = (graph.key(edge.from()), graph.key(edge.to())) else {
            continue;
        };
        if sets.connected(from, to) {
            trace!(edge = %edge.id(), "edge joins an existing component, discarded");
            continue;
        }
        sets.union(from, to);
        tree.accept(edge);
    }

    Ok(tree)
}

fn prim<T: NodeKey, C: Comparator<Edge>>(
    graph: &Graph<T>,
    cmp: &C,
    start: NodeId,
) -> GraphResult<SpanningTree> {
    let mut tree = SpanningTree::new();
    if graph.node(start).is_none() {
        return Ok(tree);
    }

    let mut heap = PriorityHeap::with_capacity(graph.edge_count(), cmp);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queued: HashSet<EdgeId> = HashSet::new();

    visited.insert(start);
    flood(graph, start, &mut heap, &mut queued)?;

    while let Some(edge) = heap.pop() {
        let to = edge.to();
        if !visited.insert(to) {
            trace!(edge = %edge.id(), "edge leads to a visited node, discarded");
            continue;
        }
        tree.accept(edge);
        flood(graph, to, &mut heap, &mut queued)?;
    }

    Ok(tree)
}

/// Push every outgoing edge of `node` that has not been queued before
fn flood<T: NodeKey, C: Comparator<Edge>>(
    graph: &Graph<T>,
    node: NodeId,
    heap: &mut PriorityHeap<Edge, C>,
    queued: &mut HashSet<EdgeId>,
) -> Result<(), HeapError> {
    for edge in graph.outgoing(node) {
        if queued.insert(edge.id()) {
            heap.push(*edge)?;
        }
    }
    Ok(())
}
