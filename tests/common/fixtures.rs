//! Hand-built graphs with known answers

use graphkit::{Graph, NodeId};
use std::collections::HashMap;

/// A graph together with the handle of every key
pub struct SampleGraph {
    pub graph: Graph<&'static str>,
    pub ids: HashMap<&'static str, NodeId>,
}

impl SampleGraph {
    pub fn id(&self, key: &str) -> NodeId {
        self.ids[key]
    }
}

/// Five nodes A..E with directed weighted edges:
///
/// A->B 6, A->C 1, B->C 3, B->D 7, C->D 4, C->E 9, D->E 2
///
/// Shortest distances from A are A 0, C 1, D 5, B 6, E 7.
pub fn sample_weighted_graph() -> SampleGraph {
    let mut graph = Graph::new();
    let mut ids = HashMap::new();
    for key in ["A", "B", "C", "D", "E"] {
        ids.insert(key, graph.add_node(key));
    }
    for (from, to, weight) in [
        ("A", "B", 6),
        ("A", "C", 1),
        ("B", "C", 3),
        ("B", "D", 7),
        ("C", "D", 4),
        ("C", "E", 9),
        ("D", "E", 2),
    ] {
        graph.add_edge(ids[from], ids[to], weight);
    }
    SampleGraph { graph, ids }
}
