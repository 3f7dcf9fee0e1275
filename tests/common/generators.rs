//! Seeded random graph generators

use graphkit::{Graph, NodeId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// A generated graph with its node handles in key order
pub struct GeneratedGraph {
    pub graph: Graph<usize>,
    pub ids: Vec<NodeId>,
}

fn with_nodes(count: usize) -> GeneratedGraph {
    let mut graph = Graph::new();
    let ids = (0..count).map(|key| graph.add_node(key)).collect();
    GeneratedGraph { graph, ids }
}

/// Connected graph where every connection exists in both directions with
/// the same weight, and all connection weights are distinct.
///
/// A random tree guarantees connectivity; `extra` more connections are
/// layered on top (duplicates of an existing pair are skipped).
pub fn random_symmetric(seed: u64, nodes: usize, extra: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut generated = with_nodes(nodes);

    let mut pairs: Vec<(usize, usize)> = (1..nodes).map(|i| (rng.gen_range(0..i), i)).collect();
    for _ in 0..extra {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        let pair = (a.min(b), a.max(b));
        if a != b && !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }

    let mut weights: Vec<i64> = (1..=pairs.len() as i64).collect();
    weights.shuffle(&mut rng);

    for ((a, b), weight) in pairs.into_iter().zip(weights) {
        let (x, y) = (generated.ids[a], generated.ids[b]);
        generated.graph.add_edge(x, y, weight);
        generated.graph.add_edge(y, x, weight);
    }
    generated
}

/// Directed graph with `edges` random edges of weight `0..=max_weight`.
/// Self-loops and parallel edges may appear.
pub fn random_directed(seed: u64, nodes: usize, edges: usize, max_weight: i64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut generated = with_nodes(nodes);
    for _ in 0..edges {
        let from = generated.ids[rng.gen_range(0..nodes)];
        let to = generated.ids[rng.gen_range(0..nodes)];
        generated.graph.add_edge(from, to, rng.gen_range(0..=max_weight));
    }
    generated
}

/// Like [`random_directed`] but with at most one edge per ordered pair.
/// Self-loops may still appear.
pub fn random_simple_directed(
    seed: u64,
    nodes: usize,
    edges: usize,
    max_weight: i64,
) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut generated = with_nodes(nodes);
    let mut taken: HashSet<(usize, usize)> = HashSet::new();
    for _ in 0..edges {
        let pair = (rng.gen_range(0..nodes), rng.gen_range(0..nodes));
        if !taken.insert(pair) {
            continue;
        }
        let weight = rng.gen_range(0..=max_weight);
        generated
            .graph
            .add_edge(generated.ids[pair.0], generated.ids[pair.1], weight);
    }
    generated
}

/// Acyclic graph: every edge runs from a lower key to a higher key. Nodes
/// are still inserted in key order, but edges are added in random order.
pub fn random_dag(seed: u64, nodes: usize, density: f64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut generated = with_nodes(nodes);

    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if rng.gen_bool(density) {
                pairs.push((a, b));
            }
        }
    }
    pairs.shuffle(&mut rng);

    for (a, b) in pairs {
        generated
            .graph
            .add_edge(generated.ids[a], generated.ids[b], 1);
    }
    generated
}
