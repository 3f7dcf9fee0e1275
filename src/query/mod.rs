//! Algorithms over a [`Graph`](crate::Graph)
//!
//! Traversals, topological ordering, spanning trees and shortest paths.
//! Every algorithm is exposed both as a method on the graph and, where it
//! takes options, as a query value with an `execute` step.

mod mst;
mod path;
mod traverse;
mod types;

pub use mst::{SpanningAlgorithm, SpanningTreeQuery};
pub use traverse::TraverseQuery;
pub use types::{
    DistanceMap, DistanceMatrix, SpanningTree, TraversalOrder, TraversalResult, INFINITY,
};
