//! Core graph data structures

mod digraph;
mod edge;
mod node;


pub use digraph::Graph;
pub use edge::{Edge, EdgeId};
pub use node::{Node, NodeId, NodeKey};
