//! Shortest path algorithms

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::types::{DistanceMap, DistanceMatrix};
use crate::graph::{Graph, NodeId, NodeKey};

impl<T: NodeKey> Graph<T> {
    /// Single-source shortest distances from `from` (Dijkstra).
    ///
    /// The next node to settle is found by a linear scan over the tentative
    /// distances. Nodes that cannot be reached are absent from the result.
    /// Weights must be non-negative; negative weights give wrong distances
    /// without any error.
    pub fn dijkstra(&self, from: NodeId) -> DistanceMap {
        let mut distances: HashMap<NodeId, i64> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        distances.insert(from, 0);

        while let Some((current, distance)) = closest_unsettled(&distances, &settled) {
            for edge in self.outgoing(current) {
                let candidate = distance.saturating_add(edge.weight());
                distances
                    .entry(edge.to())
                    .and_modify(|known| *known = (*known).min(candidate))
                    .or_insert(candidate);
            }
            settled.insert(current);
        }

        debug!(
            source = %from,
            reached = distances.len(),
            "dijkstra complete"
        );
        DistanceMap::new(from, distances)
    }

    /// All-pairs shortest distances over the live nodes (Floyd-Warshall).
    ///
    /// Direct edges seed the matrix; among parallel edges the one added last
    /// wins, and self-loops never replace the zero diagonal. A relaxation
    /// step is skipped when either leg is unreachable or the sum overflows.
    /// Negative edges are fine, negative cycles give undefined distances.
    pub fn floyd_warshall(&self) -> DistanceMatrix {
        let nodes: Vec<NodeId> = self.node_ids().collect();
        let n = nodes.len();
        let position: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut cells: Vec<Option<i64>> = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(0);
        }
        for edge in self.edges() {
            let (Some(&i), Some(&j)) = (position.get(&edge.from()), position.get(&edge.to())) else {
                continue;
            };
            if i != j {
                cells[i * n + j] = Some(edge.weight());
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(via) = cells[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(rest) = cells[k * n + j] else {
                        continue;
                    };
                    let Some(through) = via.checked_add(rest) else {
                        continue;
                    };
                    let cell = &mut cells[i * n + j];
                    if cell.map_or(true, |current| through < current) {
                        *cell = Some(through);
                    }
                }
            }
        }

        debug!(
            nodes = n,
            edges = self.edge_count(),
            "floyd-warshall complete"
        );
        DistanceMatrix::new(nodes, cells)
    }
}

/// Unsettled node with the smallest tentative distance; ties go to the
/// lower handle so the scan is deterministic.
fn closest_unsettled(
    distances: &HashMap<NodeId, i64>,
    settled: &HashSet<NodeId>,
) -> Option<(NodeId, i64)> {
    distances
        .iter()
        .filter(|(id, _)| !settled.contains(id))
        .min_by_key(|(id, distance)| (**distance, **id))
        .map(|(id, distance)| (*id, *distance))
}
