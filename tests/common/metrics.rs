//! Brute-force reference computations
//!
//! Deliberately naive versions of the crate's algorithms, used as oracles
//! in property tests.

use graphkit::{Graph, NodeId, NodeKey};
use std::collections::{HashMap, HashSet};

/// Every node reachable from `start` by following edges, start included
pub fn reachable_from<T: NodeKey>(graph: &Graph<T>, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    while let Some(current) = frontier.pop() {
        for edge in graph.outgoing(current) {
            if seen.insert(edge.to()) {
                frontier.push(edge.to());
            }
        }
    }
    seen
}

/// Bellman-Ford style relaxation until nothing changes.
/// Unreachable nodes are absent.
pub fn reference_distances<T: NodeKey>(graph: &Graph<T>, source: NodeId) -> HashMap<NodeId, i64> {
    let mut distances = HashMap::from([(source, 0i64)]);
    loop {
        let mut changed = false;
        for edge in graph.edges() {
            let Some(&base) = distances.get(&edge.from()) else {
                continue;
            };
            let candidate = base + edge.weight();
            let entry = distances.entry(edge.to()).or_insert(i64::MAX);
            if candidate < *entry {
                *entry = candidate;
                changed = true;
            }
        }
        if !changed {
            return distances;
        }
    }
}

/// Minimum spanning tree weight by dense Prim over the cheapest edge
/// between each unordered pair. Assumes the graph is connected.
pub fn reference_mst_weight<T: NodeKey>(graph: &Graph<T>) -> i64 {
    let nodes: Vec<NodeId> = graph.node_ids().collect();
    let position: HashMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let n = nodes.len();

    let mut cost = vec![vec![None::<i64>; n]; n];
    for edge in graph.edges() {
        let (i, j) = (position[&edge.from()], position[&edge.to()]);
        if i == j {
            continue;
        }
        for (x, y) in [(i, j), (j, i)] {
            cost[x][y] = Some(cost[x][y].map_or(edge.weight(), |c: i64| c.min(edge.weight())));
        }
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![None::<i64>; n];
    let mut total = 0;
    if n == 0 {
        return 0;
    }
    best[0] = Some(0);
    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .filter_map(|v| best[v].map(|b| (b, v)))
            .min();
        let Some((weight, v)) = next else {
            break;
        };
        in_tree[v] = true;
        total += weight;
        for u in 0..n {
            if let Some(c) = cost[v][u] {
                if !in_tree[u] && best[u].map_or(true, |b| c < b) {
                    best[u] = Some(c);
                }
            }
        }
    }
    total
}
