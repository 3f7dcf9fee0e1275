//! Graphkit: In-Memory Graph Algorithms
//!
//! A directed, weighted multigraph with the classic algorithms on top and
//! the data structures they are built from.
//!
//! # Core Concepts
//!
//! - **Graph**: Owns every node and edge; callers hold copyable handles
//! - **Nodes**: Keyed by any hashable value, tracking degree and adjacency
//! - **Edges**: Directed, with a signed integer weight
//! - **Collections**: Bounded priority heap, disjoint-set, queue and stack
//!
//! # Example
//!
//! ```
//! use graphkit::{collections::by_weight, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_edge(a, b, 2);
//! graph.add_edge(b, c, 3);
//! graph.add_edge(a, c, 9);
//!
//! assert_eq!(graph.bfs(a), vec!["a", "b", "c"]);
//! assert_eq!(graph.dijkstra(a).get(c), Some(5));
//! assert_eq!(graph.kruskal(by_weight).unwrap().total_weight(), 5);
//! ```

pub mod collections;
mod config;
mod error;
mod graph;
pub mod query;

pub use config::{GraphConfig, MAX_PREALLOCATION};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, NodeKey};
pub use query::{
    DistanceMap, DistanceMatrix, SpanningAlgorithm, SpanningTree, SpanningTreeQuery,
    TraversalOrder, TraversalResult, TraverseQuery, INFINITY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
